use wayfind_core::Point;

/// The eight neighbour offsets in scan order: E, S, W, N, NW, SE, SW, NE.
///
/// Ties between equally cheap candidates are broken by this order, so it
/// is part of the search's observable behaviour.
pub const OFFSETS: [Point; 8] = [
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(0, -1),
    Point::new(-1, -1),
    Point::new(1, 1),
    Point::new(-1, 1),
    Point::new(1, -1),
];

/// Cached neighbour computation helper.
///
/// Enumerates the 8 neighbours of a grid point in [`OFFSETS`] order,
/// filtered by a predicate, reusing one buffer across calls.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(OFFSETS.len()),
        }
    }

    /// Return the neighbours of `p` for which `keep` returns `true`.
    pub fn all(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for d in OFFSETS {
            let n = p + d;
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
