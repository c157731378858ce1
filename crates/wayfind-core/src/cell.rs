//! The [`Cell`] state enum.

use std::fmt;

/// State of a single grid position.
///
/// Editors cycle through the variants in declaration order with
/// [`Cell::next`] and [`Cell::prev`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Walkable,
    Obstacle,
    Start,
    End,
}

impl Cell {
    /// Forward cyclic successor: Walkable → Obstacle → Start → End → Walkable.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::Walkable => Self::Obstacle,
            Self::Obstacle => Self::Start,
            Self::Start => Self::End,
            Self::End => Self::Walkable,
        }
    }

    /// Backward cyclic successor, the inverse of [`Cell::next`].
    #[inline]
    pub const fn prev(self) -> Self {
        match self {
            Self::Walkable => Self::End,
            Self::Obstacle => Self::Walkable,
            Self::Start => Self::Obstacle,
            Self::End => Self::Start,
        }
    }

    /// Whether a search may step onto this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Obstacle)
    }

    /// Single-character glyph used by text renderers.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Self::Walkable => '.',
            Self::Obstacle => '#',
            Self::Start => 'S',
            Self::End => 'E',
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Walkable => "walkable",
            Self::Obstacle => "obstacle",
            Self::Start => "start",
            Self::End => "end",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_cycle() {
        assert_eq!(Cell::Walkable.next(), Cell::Obstacle);
        assert_eq!(Cell::Obstacle.next(), Cell::Start);
        assert_eq!(Cell::Start.next(), Cell::End);
        assert_eq!(Cell::End.next(), Cell::Walkable);
    }

    #[test]
    fn prev_inverts_next() {
        for c in [Cell::Walkable, Cell::Obstacle, Cell::Start, Cell::End] {
            assert_eq!(c.next().prev(), c);
            assert_eq!(c.prev().next(), c);
        }
    }

    #[test]
    fn four_steps_is_identity() {
        let mut c = Cell::Start;
        for _ in 0..4 {
            c = c.next();
        }
        assert_eq!(c, Cell::Start);
    }

    #[test]
    fn only_obstacles_block() {
        assert!(Cell::Walkable.is_passable());
        assert!(Cell::Start.is_passable());
        assert!(Cell::End.is_passable());
        assert!(!Cell::Obstacle.is_passable());
    }
}
