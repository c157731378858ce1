use wayfind_core::Grid;

use crate::{PathError, Trace};

/// A search strategy that traces a path between the grid's start and end
/// cells.
pub trait PathAlgorithm {
    /// Short human-readable name, shown by front ends.
    fn name(&self) -> &'static str;

    /// Search `grid` from its single start cell to its single end cell.
    ///
    /// Returns [`PathError::InvalidEndpoints`] without searching when the
    /// grid does not hold exactly one of each. An empty trace means the end
    /// is unreachable.
    fn find_path(&mut self, grid: &Grid) -> Result<Trace, PathError>;
}
