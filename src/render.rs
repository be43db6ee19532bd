use std::path::Path;

use image::{Rgb, RgbImage};

use crate::{error::Result, maze::Maze};

const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);
const CORRIDOR: Rgb<u8> = Rgb([255, 255, 255]);
const SOLUTION: Rgb<u8> = Rgb([220, 30, 30]);

/// A line segment between two pixel `(row, col)` positions.
type Segment = ((i32, i32), (i32, i32));

fn segment_length(((row_a, col_a), (row_b, col_b)): Segment) -> f32 {
    let dx = (col_a - col_b) as f32;
    let dy = (row_a - row_b) as f32;
    (dx * dx + dy * dy).sqrt()
}

/// Distance from pixel `(x, y)` to the closest point of `segment`.
fn distance_to_segment(x: f32, y: f32, ((row_a, col_a), (row_b, col_b)): Segment) -> f32 {
    let (ax, ay) = (col_a as f32, row_a as f32);
    let (bx, by) = (col_b as f32, row_b as f32);
    let (dx, dy) = (bx - ax, by - ay);
    let length_sq = dx * dx + dy * dy;
    let t = if length_sq == 0.0 {
        0.0
    } else {
        (((x - ax) * dx + (y - ay) * dy) / length_sq).clamp(0.0, 1.0)
    };
    let (cx, cy) = (ax + t * dx, ay + t * dy);
    ((x - cx) * (x - cx) + (y - cy) * (y - cy)).sqrt()
}

/// Strokes `segment` with a round-capped pen of the given width, clipped to the canvas.
fn draw_segment(canvas: &mut RgbImage, segment: Segment, pen_width: f32, color: Rgb<u8>) {
    let radius = (pen_width / 2.0).max(0.5);
    let ((row_a, col_a), (row_b, col_b)) = segment;
    let reach = radius.ceil() as i32;

    let min_x = (col_a.min(col_b) - reach).max(0);
    let max_x = (col_a.max(col_b) + reach).min(canvas.width() as i32 - 1);
    let min_y = (row_a.min(row_b) - reach).max(0);
    let max_y = (row_a.max(row_b) + reach).min(canvas.height() as i32 - 1);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            if distance_to_segment(x as f32, y as f32, segment) <= radius {
                canvas.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/// Draws the maze corridors, and the solution if there is one, on a fresh canvas.
///
/// Returns `None` if the maze has not been generated.
pub fn render(maze: &Maze, width: u32, height: u32) -> Option<RgbImage> {
    let viewport = maze.viewport(width, height)?;
    let tree = maze.spanning_tree()?;

    let mut canvas = RgbImage::from_pixel(width, height, BACKGROUND);

    let corridors = tree
        .adjacencies()
        .iter()
        .map(|adjacency| maze.image_space_adjacency(&viewport, adjacency))
        .collect::<Vec<_>>();
    // Corridors are half as wide as the longest one is long, so walls stay as thick as paths
    let max_length = corridors
        .iter()
        .copied()
        .map(segment_length)
        .fold(0.0_f32, f32::max);
    let pen_width = (max_length / 2.0).max(1.0);
    tracing::debug!(
        "[render] drawing {} corridors with pen width {:.1}",
        corridors.len(),
        pen_width
    );

    corridors
        .iter()
        .for_each(|&segment| draw_segment(&mut canvas, segment, pen_width, CORRIDOR));

    let solution_pen = (pen_width / 3.0).max(1.0);
    maze.solution()
        .iter()
        .map(|adjacency| maze.image_space_adjacency(&viewport, adjacency))
        .for_each(|segment| draw_segment(&mut canvas, segment, solution_pen, SOLUTION));

    Some(canvas)
}

/// Writes a rendered maze to disk. The format follows the file extension.
pub fn save_image(canvas: &RgbImage, path: &Path) -> Result<()> {
    canvas.save(path)?;
    tracing::info!("Wrote {}x{} image to {}", canvas.width(), canvas.height(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeKind;

    #[test]
    fn test_render_requires_generated_maze() {
        let maze = Maze::new(ShapeKind::Rectangular { rows: 3, cols: 3 });
        assert!(render(&maze, 32, 32).is_none());
    }

    #[test]
    fn test_render_draws_corridors() {
        let mut maze = Maze::new(ShapeKind::Rectangular { rows: 5, cols: 5 });
        maze.generate(8);
        let canvas = render(&maze, 120, 120).unwrap();
        assert_eq!(canvas.dimensions(), (120, 120));
        assert!(canvas.pixels().any(|&p| p == CORRIDOR));
        assert!(canvas.pixels().any(|&p| p == BACKGROUND));
        assert!(!canvas.pixels().any(|&p| p == SOLUTION));
    }

    #[test]
    fn test_render_draws_solution() {
        let mut maze = Maze::new(ShapeKind::Circular { rings: 3 });
        maze.generate(21);
        assert!(maze.solve());
        let canvas = render(&maze, 200, 150).unwrap();
        assert!(canvas.pixels().any(|&p| p == SOLUTION));
    }

    #[test]
    fn test_distance_to_segment() {
        let segment = ((0, 0), (0, 10));
        assert_eq!(distance_to_segment(5.0, 3.0, segment), 3.0);
        // Beyond the end the distance is measured to the endpoint
        assert_eq!(distance_to_segment(13.0, 4.0, segment), 5.0);
        assert_eq!(segment_length(segment), 10.0);
    }
}
