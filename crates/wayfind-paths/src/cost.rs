use std::fmt;

use wayfind_core::{Point, dist};

/// Distance scaled by 10 and floored, the unit every search cost uses.
#[inline]
pub fn scaled_dist(a: Point, b: Point) -> i32 {
    (10.0 * dist(a, b)).floor() as i32
}

/// Cost of the single step between two adjacent cells: 10 orthogonally,
/// 14 diagonally.
#[inline]
pub fn step_cost(from: Point, to: Point) -> i32 {
    scaled_dist(from, to)
}

/// Straight-line estimate of the remaining cost from `p` to `end`.
#[inline]
pub fn heuristic_cost(p: Point, end: Point) -> i32 {
    scaled_dist(p, end)
}

/// The three components of a candidate's total cost.
///
/// `accumulated` is the cost of the parent chain behind the step, so the
/// accumulated cost of the cell itself is `step + accumulated`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostBreakdown {
    pub step: i32,
    pub accumulated: i32,
    pub heuristic: i32,
}

impl CostBreakdown {
    /// `step + accumulated + heuristic`.
    #[inline]
    pub const fn total(self) -> i32 {
        self.step + self.accumulated + self.heuristic
    }
}

impl fmt::Display for CostBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "step {} + accumulated {} + heuristic {} = {}",
            self.step,
            self.accumulated,
            self.heuristic,
            self.total()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_costs() {
        let o = Point::new(4, 4);
        assert_eq!(step_cost(o, Point::new(5, 4)), 10);
        assert_eq!(step_cost(o, Point::new(4, 3)), 10);
        assert_eq!(step_cost(o, Point::new(5, 5)), 14);
        assert_eq!(step_cost(o, Point::new(3, 3)), 14);
    }

    #[test]
    fn heuristic_is_floored_not_rounded() {
        // 10 * sqrt(5) = 22.36...
        assert_eq!(heuristic_cost(Point::new(1, 0), Point::new(2, 2)), 22);
        // 10 * sqrt(8) = 28.28...
        assert_eq!(heuristic_cost(Point::new(0, 0), Point::new(2, 2)), 28);
        assert_eq!(heuristic_cost(Point::new(0, 0), Point::new(3, 4)), 50);
        assert_eq!(heuristic_cost(Point::new(7, 7), Point::new(7, 7)), 0);
    }

    #[test]
    fn breakdown_total_and_text() {
        let c = CostBreakdown {
            step: 14,
            accumulated: 10,
            heuristic: 22,
        };
        assert_eq!(c.total(), 46);
        assert_eq!(c.to_string(), "step 14 + accumulated 10 + heuristic 22 = 46");
    }
}
