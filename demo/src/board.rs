//! Editing session: a grid, its latest search trace and a status line.
//!
//! Every edit recomputes the trace, mirroring an interactive front end
//! where the path redraws after each click or key press.

use std::fmt;

use log::info;
use rand::Rng;
use wayfind_core::{Cell, Grid, Point};
use wayfind_maze::MazeGen;
use wayfind_paths::{BestFirst, PathAlgorithm, SearchConfig, Trace};

/// Outcome of the latest recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ready { visited: usize, path_len: usize },
    NoRoute,
    NeedOneStart,
    NeedOneEnd,
}

impl Status {
    pub fn is_ready(self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready { visited, path_len } => {
                write!(f, "Path of {path_len} cells found after visiting {visited}")
            }
            Self::NoRoute => f.write_str("There is no way to the end cell from the start cell"),
            Self::NeedOneStart => f.write_str("There has to be exactly one start cell"),
            Self::NeedOneEnd => f.write_str("There has to be exactly one end cell"),
        }
    }
}

/// A grid plus the search state derived from it.
pub struct Board {
    grid: Grid,
    algo: Box<dyn PathAlgorithm>,
    trace: Trace,
    status: Status,
}

impl Board {
    /// An all-walkable board of the given size.
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_config(width, height, SearchConfig::default())
    }

    pub fn with_config(width: i32, height: i32, config: SearchConfig) -> Self {
        let mut board = Self {
            grid: Grid::new(width, height),
            algo: Box::new(BestFirst::with_config(config)),
            trace: Trace::no_path(),
            status: Status::NeedOneStart,
        };
        board.recompute();
        board
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn algorithm_name(&self) -> &'static str {
        self.algo.name()
    }

    /// Reset every cell to walkable.
    pub fn clear(&mut self) -> Status {
        self.grid.fill(Cell::Walkable);
        self.recompute()
    }

    /// Replace the board with a freshly carved maze.
    pub fn regenerate<R: Rng>(&mut self, rng: R) -> Status {
        let walkable = MazeGen::new(rng).carve(&mut self.grid);
        info!("generated maze with {walkable} walkable cells");
        self.recompute()
    }

    /// Set the cell at `p` directly, as a scripted editor would.
    pub fn place(&mut self, p: Point, cell: Cell) -> Status {
        self.grid.set(p, cell);
        self.recompute()
    }

    /// Advance the cell at `p` to its next state.
    pub fn cycle_forward(&mut self, p: Point) -> Status {
        self.grid.cycle_forward(p);
        self.recompute()
    }

    /// Move the cell at `p` back to its previous state.
    pub fn cycle_backward(&mut self, p: Point) -> Status {
        self.grid.cycle_backward(p);
        self.recompute()
    }

    /// Annotation of the visited cell at `p`, for hover displays.
    pub fn hover(&self, p: Point) -> Option<&str> {
        self.trace.annotation_at(p)
    }

    /// Validate the endpoints and rerun the search.
    ///
    /// The trace is cleared whenever the grid has the wrong number of start
    /// or end cells; a bad start count is reported before a bad end count.
    pub fn recompute(&mut self) -> Status {
        self.status = match self.algo.find_path(&self.grid) {
            Ok(trace) => {
                self.trace = trace;
                if self.trace.is_empty() {
                    Status::NoRoute
                } else {
                    Status::Ready {
                        visited: self.trace.len(),
                        path_len: self.trace.optimal_path().len(),
                    }
                }
            }
            Err(err) => {
                self.trace = Trace::no_path();
                if err.bad_start() {
                    Status::NeedOneStart
                } else {
                    Status::NeedOneEnd
                }
            }
        };
        self.status
    }
}
