//! Incremental best-first search with parent relaxation.
//!
//! Every iteration rescans the whole search record for the cheapest
//! unvisited neighbour, appends it, and then lets already-visited
//! neighbours of the new cell switch their parent to it when that shortens
//! their chain back to the start. Unlike a textbook A*, closed cells are
//! revisited, so the resulting path depends on this exact evaluation order.

use log::{debug, trace, warn};
use wayfind_core::{Cell, Grid, Point};

use crate::cost::{CostBreakdown, heuristic_cost, step_cost};
use crate::error::PathError;
use crate::neighbors::Neighbors;
use crate::record::SearchRecord;
use crate::trace::{PathPoint, Trace};
use crate::traits::PathAlgorithm;

/// Tuning for [`BestFirst`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Produce a human-readable cost annotation for every visited cell.
    pub annotate: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { annotate: true }
    }
}

impl SearchConfig {
    /// Enable or disable annotation text (builder).
    pub fn with_annotations(mut self, annotate: bool) -> Self {
        self.annotate = annotate;
        self
    }
}

/// Locate the single start and end cells of `grid`.
pub fn locate_endpoints(grid: &Grid) -> Result<(Point, Point), PathError> {
    let starts = grid.find(Cell::Start);
    let ends = grid.find(Cell::End);
    match (starts.as_slice(), ends.as_slice()) {
        ([start], [end]) => Ok((*start, *end)),
        _ => {
            warn!(
                "rejecting grid with {} start and {} end cells",
                starts.len(),
                ends.len()
            );
            Err(PathError::InvalidEndpoints {
                starts: starts.len(),
                ends: ends.len(),
            })
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Candidate {
    pos: Point,
    parent: usize,
    total: i32,
}

/// The best-first pathfinder.
///
/// Holds a reusable neighbour buffer; the grid is only borrowed for the
/// duration of [`BestFirst::find_path`].
#[derive(Default)]
pub struct BestFirst {
    config: SearchConfig,
    neighbors: Neighbors,
}

impl BestFirst {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            neighbors: Neighbors::new(),
        }
    }

    /// Search `grid` from its start cell to its end cell.
    ///
    /// Returns every visited cell in visit order, with the start-to-end
    /// chain flagged optimal, or an empty trace if the end is unreachable.
    pub fn find_path(&mut self, grid: &Grid) -> Result<Trace, PathError> {
        let (start, end) = locate_endpoints(grid)?;
        let mut record = SearchRecord::new(start);

        let end_idx = loop {
            let Some(best) = self.cheapest_frontier(grid, &record, end) else {
                debug!(
                    "no route from {start} to {end} after visiting {} cells",
                    record.len()
                );
                return Ok(Trace::no_path());
            };
            let idx = record.push(best.pos, best.parent);
            self.relax(&mut record, idx);
            if best.pos == end {
                break idx;
            }
        };

        let trace = self.build_trace(&record, end_idx, end);
        debug!(
            "route {start} -> {end}: {} cells visited, path of {}",
            trace.len(),
            trace.optimal_path().len()
        );
        Ok(trace)
    }

    /// Scan every recorded cell for its cheapest unvisited, passable
    /// neighbour. Ties go to the first candidate found.
    fn cheapest_frontier(
        &mut self,
        grid: &Grid,
        record: &SearchRecord,
        end: Point,
    ) -> Option<Candidate> {
        let mut best: Option<Candidate> = None;
        for i in 0..record.len() {
            let from = record.pos(i);
            let accumulated = record.accumulated_cost(i);
            let open = self
                .neighbors
                .all(from, |n| !record.contains(n) && grid.is_passable(n));
            for &n in open {
                let costs = CostBreakdown {
                    step: step_cost(from, n),
                    accumulated,
                    heuristic: heuristic_cost(n, end),
                };
                let total = costs.total();
                if best.is_none_or(|b| total < b.total) {
                    best = Some(Candidate {
                        pos: n,
                        parent: i,
                        total,
                    });
                }
            }
        }
        best
    }

    /// Re-parent visited neighbours of `newest` onto it when that strictly
    /// lowers their accumulated cost.
    ///
    /// Step costs are positive, so no ancestor of `newest` can pass the
    /// strict comparison and the parent links stay acyclic.
    fn relax(&mut self, record: &mut SearchRecord, newest: usize) {
        let pos = record.pos(newest);
        let visited = self.neighbors.all(pos, |n| record.contains(n));
        for &n in visited {
            let Some(j) = record.index_of(n) else {
                continue;
            };
            if j == 0 {
                continue;
            }
            let current = record.accumulated_cost(j);
            let through_newest = step_cost(n, pos) + record.accumulated_cost(newest);
            if through_newest < current {
                trace!("relax {n}: {current} -> {through_newest} via {pos}");
                record.reparent(j, newest);
            }
        }
    }

    fn build_trace(&self, record: &SearchRecord, end_idx: usize, end: Point) -> Trace {
        let mut on_path = vec![false; record.len()];
        let mut path: Vec<Point> = Vec::new();
        for i in record.chain(end_idx).take(record.len()) {
            on_path[i] = true;
            path.push(record.pos(i));
        }
        path.reverse();

        let points = record
            .entries()
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let costs = match record.parent(i) {
                    Some(p) => CostBreakdown {
                        step: step_cost(record.pos(p), e.pos),
                        accumulated: record.accumulated_cost(p),
                        heuristic: heuristic_cost(e.pos, end),
                    },
                    None => CostBreakdown {
                        heuristic: heuristic_cost(e.pos, end),
                        ..CostBreakdown::default()
                    },
                };
                PathPoint {
                    pos: e.pos,
                    is_optimal: on_path[i],
                    costs,
                    text: self.config.annotate.then(|| format!("{} {}", e.pos, costs)),
                }
            })
            .collect();

        Trace::new(points, path)
    }
}

impl PathAlgorithm for BestFirst {
    fn name(&self) -> &'static str {
        "best-first"
    }

    fn find_path(&mut self, grid: &Grid) -> Result<Trace, PathError> {
        BestFirst::find_path(self, grid)
    }
}

/// Run a default-configured [`BestFirst`] search on `grid`.
pub fn find_path(grid: &Grid) -> Result<Trace, PathError> {
    BestFirst::new().find_path(grid)
}
