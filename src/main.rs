use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ringmaze::{
    Maze, MazeError, ShapeKind, generators::time_seed, logging::init_tracing, render,
};

/// Generate a random perfect maze, optionally solve it, and render it to an image.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    shape: ShapeArgs,

    /// Random seed; derived from the current time when omitted
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Find and draw the path from start to finish
    #[arg(long, global = true)]
    solve: bool,

    /// Output image path
    #[arg(short, long, global = true, default_value = "maze.png")]
    output: PathBuf,

    /// Canvas width in pixels
    #[arg(short = 'W', long, global = true, default_value = "1024")]
    width: u32,

    /// Canvas height in pixels
    #[arg(short = 'H', long, global = true, default_value = "768")]
    height: u32,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to a daily rolling file in this directory instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum ShapeArgs {
    /// Rectangular grid maze
    Rect { rows: usize, cols: usize },
    /// Concentric-ring maze
    Circ { rings: usize },
}

impl From<&ShapeArgs> for ShapeKind {
    fn from(args: &ShapeArgs) -> Self {
        match *args {
            ShapeArgs::Rect { rows, cols } => ShapeKind::Rectangular { rows, cols },
            ShapeArgs::Circ { rings } => ShapeKind::Circular { rings },
        }
    }
}

fn run(args: &Args) -> ringmaze::Result<()> {
    let kind = ShapeKind::from(&args.shape);
    kind.validate()?;
    if args.width == 0 || args.height == 0 {
        return Err(MazeError::InvalidShape {
            reason: format!("canvas must not be empty, got {}x{}", args.width, args.height),
        });
    }

    let seed = args.seed.unwrap_or_else(time_seed);
    tracing::info!("Using seed {} (pass --seed {} to reproduce)", seed, seed);

    let mut maze = Maze::new(kind);
    maze.generate(seed);

    if args.solve && !maze.solve() {
        tracing::warn!("Rendering without a solution");
    }

    let canvas = render::render(&maze, args.width, args.height).ok_or(MazeError::NotGenerated)?;
    render::save_image(&canvas, &args.output)
}

fn main() {
    let args = Args::parse();
    let _guard = init_tracing(args.verbose, args.log_dir.as_deref());

    if let Err(err) = run(&args) {
        tracing::error!("{}", err);
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
