use crate::{graph::Point, shape::Bounds};

/// Graph-space region fitted to a pixel canvas of a given size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    bounds: Bounds,
    width: u32,
    height: u32,
}

impl Viewport {
    /// Fits `bounds` to the canvas aspect ratio, so shapes are not stretched.
    pub fn new(mut bounds: Bounds, width: u32, height: u32) -> Self {
        if width > 0 && height > 0 {
            bounds.expand_to_aspect(width as f32 / height as f32);
        }
        Viewport {
            bounds,
            width,
            height,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel `(row, col)` of a graph-space point.
    pub fn to_image_space(&self, point: Point) -> (i32, i32) {
        self.bounds.to_image_space(point, self.width, self.height)
    }
}
