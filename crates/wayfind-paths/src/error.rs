use std::fmt;

/// Errors reported by a pathfinder before any search runs.
///
/// An unreachable end is not an error: it yields an empty
/// [`Trace`](crate::Trace).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The grid does not hold exactly one start and exactly one end cell.
    InvalidEndpoints { starts: usize, ends: usize },
}

impl PathError {
    /// Whether the start cell count is wrong.
    pub fn bad_start(&self) -> bool {
        match *self {
            Self::InvalidEndpoints { starts, .. } => starts != 1,
        }
    }

    /// Whether the end cell count is wrong.
    pub fn bad_end(&self) -> bool {
        match *self {
            Self::InvalidEndpoints { ends, .. } => ends != 1,
        }
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoints { starts, ends } => write!(
                f,
                "grid needs exactly one start and one end cell (found {starts} start, {ends} end)"
            ),
        }
    }
}

impl std::error::Error for PathError {}
