use wayfind_core::Point;

use crate::cost::CostBreakdown;

/// One visited cell of a search, as handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathPoint {
    pub pos: Point,
    /// Whether the cell lies on the reconstructed start-to-end path.
    pub is_optimal: bool,
    pub costs: CostBreakdown,
    /// Human-readable cost annotation, `None` when annotation is disabled.
    pub text: Option<String>,
}

/// The annotated result of one search, in visit order.
///
/// An empty trace means the end cell could not be reached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace {
    points: Vec<PathPoint>,
    path: Vec<Point>,
}

impl Trace {
    pub(crate) fn new(points: Vec<PathPoint>, path: Vec<Point>) -> Self {
        Self { points, path }
    }

    /// Trace for an unreachable end.
    pub fn no_path() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of visited cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// All visited cells in insertion order.
    #[inline]
    pub fn points(&self) -> &[PathPoint] {
        &self.points
    }

    /// The trace entry for `p`, if the search visited it.
    pub fn get(&self, p: Point) -> Option<&PathPoint> {
        self.points.iter().find(|pp| pp.pos == p)
    }

    /// Annotation text for the cell at `p`, if visited and annotated.
    pub fn annotation_at(&self, p: Point) -> Option<&str> {
        self.get(p).and_then(|pp| pp.text.as_deref())
    }

    /// The optimal path from start to end, in walking order.
    ///
    /// Relaxation can give a cell a parent that was visited after it, so
    /// this order may differ from the visit order of the flagged points.
    pub fn optimal_path(&self) -> &[Point] {
        &self.path
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathPoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a PathPoint;
    type IntoIter = std::slice::Iter<'a, PathPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
