//! A fixed-size grid of [`Cell`] states.
//!
//! Storage is column-major: `x` is the outer dimension, `y` the inner one,
//! and whole-grid scans visit every row of column 0 before moving to
//! column 1. Searches rely on that order when locating the start and end
//! cells.

use crate::cell::Cell;
use crate::geom::Point;

/// Default grid width in cells.
pub const DEFAULT_WIDTH: i32 = 15;
/// Default grid height in cells.
pub const DEFAULT_HEIGHT: i32 = 15;

/// A 2D grid of [`Cell`] values owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<Cell>,
    width: i32,
    height: i32,
}

impl Grid {
    /// Create a new grid filled with [`Cell::Walkable`].
    ///
    /// Negative dimensions are clamped to zero. The cell count is computed
    /// in `usize`, so no `i32` product can overflow.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            cells: vec![Cell::default(); width as usize * height as usize],
            width,
            height,
        }
    }

    /// Create a grid from columns, `columns[x][y]`. Columns must all have
    /// the same length; shorter ones are padded with walkable cells.
    pub fn from_columns(columns: &[&[Cell]]) -> Self {
        let width = columns.len() as i32;
        let height = columns.iter().map(|c| c.len()).max().unwrap_or(0) as i32;
        let mut grid = Self::new(width, height);
        for (x, col) in columns.iter().enumerate() {
            for (y, &cell) in col.iter().enumerate() {
                grid.set(Point::new(x as i32, y as i32), cell);
            }
        }
        grid
    }

    /// Size as a Point (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether the grid contains the given point.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.x as usize * self.height as usize + p.y as usize)
    }

    /// Get the cell at a point, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the cell at a point. Does nothing if out of bounds.
    #[inline]
    pub fn set(&mut self, p: Point, cell: Cell) {
        if let Some(i) = self.index(p) {
            self.cells[i] = cell;
        }
    }

    /// Whether `p` is inside the grid and not an obstacle.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(Cell::is_passable)
    }

    /// Fill the entire grid with the given cell.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Advance the cell at `p` to its next state and return it.
    pub fn cycle_forward(&mut self, p: Point) -> Option<Cell> {
        let i = self.index(p)?;
        self.cells[i] = self.cells[i].next();
        Some(self.cells[i])
    }

    /// Move the cell at `p` back to its previous state and return it.
    pub fn cycle_backward(&mut self, p: Point) -> Option<Cell> {
        let i = self.index(p)?;
        self.cells[i] = self.cells[i].prev();
        Some(self.cells[i])
    }

    /// Count how many cells equal the given cell.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Positions holding `cell`, in scan order.
    pub fn find(&self, cell: Cell) -> Vec<Point> {
        self.iter()
            .filter_map(|(p, c)| (c == cell).then_some(p))
            .collect()
    }

    /// Iterate over every coordinate, `x` outer and `y` inner.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let (w, h) = (self.width, self.height);
        (0..w).flat_map(move |x| (0..h).map(move |y| Point::new(x, y)))
    }

    /// Iterate over `(Point, Cell)` pairs in scan order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.points().zip(self.cells.iter().copied())
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_size() {
        let g = Grid::new(10, 5);
        assert_eq!(g.size(), Point::new(10, 5));
        assert_eq!(g.width(), 10);
        assert_eq!(g.height(), 5);
        assert_eq!(g.count(Cell::Walkable), 50);
    }

    #[test]
    fn test_extreme_dimensions_do_not_overflow() {
        let wide = Grid::new(i32::MAX, 0);
        assert_eq!(wide.width(), i32::MAX);
        assert_eq!(wide.count(Cell::Walkable), 0);
        assert!(!wide.contains(Point::new(i32::MAX - 1, 0)));

        let tall = Grid::new(-3, i32::MAX);
        assert_eq!(tall.size(), Point::new(0, i32::MAX));
        assert_eq!(tall.at(Point::new(0, i32::MAX - 1)), None);
    }

    #[test]
    fn test_default_is_fifteen_square() {
        let g = Grid::default();
        assert_eq!(g.size(), Point::new(DEFAULT_WIDTH, DEFAULT_HEIGHT));
        assert_eq!(g.size(), Point::new(15, 15));
    }

    #[test]
    fn test_set_and_at() {
        let mut g = Grid::new(4, 3);
        let p = Point::new(3, 2);
        g.set(p, Cell::Obstacle);
        assert_eq!(g.at(p), Some(Cell::Obstacle));
        assert_eq!(g.at(Point::new(0, 0)), Some(Cell::Walkable));
        assert_eq!(g.at(Point::new(4, 0)), None);
        assert_eq!(g.at(Point::new(0, -1)), None);
    }

    #[test]
    fn test_out_of_bounds_set_is_noop() {
        let mut g = Grid::new(2, 2);
        let before = g.clone();
        g.set(Point::new(2, 0), Cell::Start);
        g.set(Point::new(-1, -1), Cell::End);
        assert_eq!(g, before);
    }

    #[test]
    fn test_fill_and_count() {
        let mut g = Grid::new(5, 5);
        g.fill(Cell::Obstacle);
        assert_eq!(g.count(Cell::Obstacle), 25);
        g.set(Point::new(0, 0), Cell::Start);
        assert_eq!(g.count(Cell::Obstacle), 24);
        assert_eq!(g.count(Cell::Start), 1);
    }

    #[test]
    fn test_scan_order_is_column_major() {
        let g = Grid::new(2, 3);
        let pts: Vec<_> = g.points().collect();
        assert_eq!(
            pts,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(1, 2),
            ]
        );
    }

    #[test]
    fn test_iter_pairs_match_at() {
        let mut g = Grid::new(3, 2);
        g.set(Point::new(1, 0), Cell::End);
        g.set(Point::new(2, 1), Cell::Obstacle);
        for (p, c) in g.iter() {
            assert_eq!(g.at(p), Some(c));
        }
        assert_eq!(g.find(Cell::End), vec![Point::new(1, 0)]);
    }

    #[test]
    fn test_cycle_forward_and_backward() {
        let mut g = Grid::new(2, 2);
        let p = Point::new(1, 1);
        assert_eq!(g.cycle_forward(p), Some(Cell::Obstacle));
        assert_eq!(g.cycle_forward(p), Some(Cell::Start));
        assert_eq!(g.cycle_backward(p), Some(Cell::Obstacle));
        assert_eq!(g.cycle_backward(p), Some(Cell::Walkable));
        assert_eq!(g.cycle_backward(p), Some(Cell::End));
        assert_eq!(g.cycle_forward(Point::new(5, 5)), None);
    }

    #[test]
    fn test_from_columns() {
        use Cell::*;
        let g = Grid::from_columns(&[&[Start, Walkable], &[Obstacle, End]]);
        assert_eq!(g.size(), Point::new(2, 2));
        assert_eq!(g.at(Point::new(0, 0)), Some(Start));
        assert_eq!(g.at(Point::new(1, 0)), Some(Obstacle));
        assert_eq!(g.at(Point::new(1, 1)), Some(End));
        assert!(!g.is_passable(Point::new(1, 0)));
        assert!(g.is_passable(Point::new(0, 1)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let mut g = Grid::new(3, 3);
        g.set(Point::new(1, 1), Cell::Obstacle);
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }
}
