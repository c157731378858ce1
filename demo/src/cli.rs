use clap::Parser;
use wayfind_core::{DEFAULT_HEIGHT, DEFAULT_WIDTH, Point};

#[derive(Debug, Parser)]
#[command(
    name = "wayfind",
    about = "Carve a maze, edit cells, and trace a best-first search through it",
    version
)]
pub struct Cli {
    /// Grid width in cells.
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = dimension())]
    pub width: i32,
    /// Grid height in cells.
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = dimension())]
    pub height: i32,
    /// Seed for the maze generator (default: OS entropy).
    #[arg(long)]
    pub seed: Option<u64>,
    /// Start from an empty board instead of a maze.
    #[arg(long)]
    pub blank: bool,
    /// Start cell as `x,y` (default: the top-left corner).
    #[arg(long, value_parser = parse_point)]
    pub start: Option<Point>,
    /// End cell as `x,y` (default: the bottom-right room of the maze).
    #[arg(long, value_parser = parse_point)]
    pub end: Option<Point>,
    /// Cycle a cell forward (walkable, obstacle, start, end). Repeatable.
    #[arg(long, value_parser = parse_point)]
    pub toggle: Vec<Point>,
    /// Cycle a cell backward. Repeatable.
    #[arg(long, value_parser = parse_point)]
    pub untoggle: Vec<Point>,
    /// Print the cost annotation of a visited cell. Repeatable.
    #[arg(long, value_parser = parse_point)]
    pub inspect: Vec<Point>,
    /// Print the trace as JSON instead of drawing the grid.
    #[arg(long)]
    pub json: bool,
    /// Draw without terminal colors.
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn start_cell(&self) -> Point {
        self.start.unwrap_or(Point::ZERO)
    }

    /// Explicit end cell, or the room furthest from the origin. Maze rooms
    /// sit on even coordinates, so odd dimensions lose their last line.
    pub fn end_cell(&self) -> Point {
        self.end.unwrap_or_else(|| {
            let last = |n: i32| ((n - 1).max(0) / 2) * 2;
            Point::new(last(self.width), last(self.height))
        })
    }
}

/// Largest accepted grid width or height.
pub const MAX_DIMENSION: i64 = 1024;

fn dimension() -> clap::builder::RangedI64ValueParser<i32> {
    clap::value_parser!(i32).range(1..=MAX_DIMENSION)
}

/// Parse an `x,y` coordinate pair.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got {s:?}"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok(Point::new(x, y))
}
