//! Pathfinding over wayfind grids.
//!
//! The main entry point is [`BestFirst`], an incremental best-first search
//! that rescans every visited cell for the cheapest next step and relaxes
//! parent links as the frontier grows. Its result is a [`Trace`]: every
//! visited cell in visit order, annotated with its [`CostBreakdown`] and
//! flagged when it lies on the reconstructed start-to-end path.
//!
//! Costs are tenths of a cell: an orthogonal step costs 10, a diagonal one
//! 14, and the heuristic is the straight-line distance to the end, scaled
//! and floored the same way.

mod best_first;
mod cost;
mod error;
mod neighbors;
mod record;
mod trace;
mod traits;

pub use best_first::{BestFirst, SearchConfig, find_path, locate_endpoints};
pub use cost::{CostBreakdown, heuristic_cost, scaled_dist, step_cost};
pub use error::PathError;
pub use neighbors::{Neighbors, OFFSETS};
pub use trace::{PathPoint, Trace};
pub use traits::PathAlgorithm;
