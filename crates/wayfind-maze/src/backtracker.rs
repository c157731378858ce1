//! Randomized depth-first ("recursive backtracker") maze carving.
//!
//! Rooms sit on the even lattice reachable from the origin in steps of two;
//! the odd cells between them are walls that get knocked down as the
//! traversal moves on. Diagonal cells around every room are always walled,
//! which keeps corridors orthogonally separated.

use std::collections::HashSet;

use log::debug;
use rand::Rng;
use wayfind_core::{Cell, Grid, Point};

/// The 8 wall offsets inspected around each room.
const WALL_OFFSETS: [Point; 8] = [
    Point::new(-1, -1),
    Point::new(-1, 0),
    Point::new(-1, 1),
    Point::new(0, 1),
    Point::new(0, -1),
    Point::new(1, -1),
    Point::new(1, 0),
    Point::new(1, 1),
];

/// Maze generator carving corridors into a caller-owned [`Grid`].
///
/// The random source is injected so that seeded generators give
/// reproducible mazes in tests; front ends pass `rand::rng()`.
///
/// The traversal always starts from (0, 0).
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Turn `grid` into a maze and return the number of walkable cells.
    ///
    /// Every cell is reset to [`Cell::Obstacle`] first, so any previous
    /// contents, start and end cells included, are discarded. Afterwards
    /// the walkable cells form one orthogonally connected region that
    /// contains the origin.
    pub fn carve(&mut self, grid: &mut Grid) -> usize {
        grid.fill(Cell::Obstacle);
        if !grid.contains(Point::ZERO) {
            return 0;
        }

        let mut visited: HashSet<Point> = HashSet::new();
        let mut stack = vec![Point::ZERO];
        let mut options: Vec<Point> = Vec::with_capacity(4);

        while let Some(&cur) = stack.last() {
            visited.insert(cur);
            grid.set(cur, Cell::Walkable);

            options.clear();
            for d in WALL_OFFSETS {
                let wall = cur + d;
                if !grid.contains(wall) {
                    continue;
                }
                let next = wall + d;
                let seen = visited.contains(&next);
                if !d.is_diagonal() && !seen && grid.contains(next) {
                    options.push(d);
                }
                // Walls towards visited rooms are left alone: one of them
                // is the corridor this room was entered through.
                if d.is_diagonal() || !seen {
                    grid.set(wall, Cell::Obstacle);
                }
            }

            if options.is_empty() {
                stack.pop();
                continue;
            }
            let d = options[self.rng.random_range(0..options.len())];
            let wall = cur + d;
            grid.set(wall, Cell::Walkable);
            stack.push(wall + d);
        }

        let walkable = grid.count(Cell::Walkable);
        debug!(
            "carved {}x{} maze: {} rooms, {} walkable cells",
            grid.width(),
            grid.height(),
            visited.len(),
            walkable
        );
        walkable
    }
}

/// Carve a maze into `grid` using `rng`. See [`MazeGen::carve`].
pub fn generate_maze<R: Rng>(grid: &mut Grid, rng: R) -> usize {
    MazeGen::new(rng).carve(grid)
}
