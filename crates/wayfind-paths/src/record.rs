use std::collections::HashMap;

use wayfind_core::Point;

use crate::cost::step_cost;

/// Parent sentinel for the root entry.
pub(crate) const NO_PARENT: usize = usize::MAX;

#[derive(Clone, Debug)]
pub(crate) struct Entry {
    pub(crate) pos: Point,
    pub(crate) parent: usize,
}

/// Append-only arena of visited points with parent back-links.
///
/// Index 0 is always the start point and is the only entry without a
/// parent. Parents are indices into the same arena; they can be moved to
/// the newest entry by [`SearchRecord::reparent`] during relaxation.
#[derive(Clone, Debug)]
pub(crate) struct SearchRecord {
    entries: Vec<Entry>,
    lookup: HashMap<Point, usize>,
}

impl SearchRecord {
    /// Create a record rooted at `start`.
    pub(crate) fn new(start: Point) -> Self {
        let mut lookup = HashMap::new();
        lookup.insert(start, 0);
        Self {
            entries: vec![Entry {
                pos: start,
                parent: NO_PARENT,
            }],
            lookup,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub(crate) fn pos(&self, i: usize) -> Point {
        self.entries[i].pos
    }

    #[inline]
    pub(crate) fn parent(&self, i: usize) -> Option<usize> {
        match self.entries[i].parent {
            NO_PARENT => None,
            p => Some(p),
        }
    }

    /// Index of `p` in the record, if it has been visited.
    #[inline]
    pub(crate) fn index_of(&self, p: Point) -> Option<usize> {
        self.lookup.get(&p).copied()
    }

    #[inline]
    pub(crate) fn contains(&self, p: Point) -> bool {
        self.lookup.contains_key(&p)
    }

    /// Append a newly visited point and return its index.
    pub(crate) fn push(&mut self, pos: Point, parent: usize) -> usize {
        debug_assert!(parent < self.entries.len());
        let idx = self.entries.len();
        self.entries.push(Entry { pos, parent });
        self.lookup.insert(pos, idx);
        idx
    }

    /// Move entry `i` under `parent`. The root is never re-parented.
    pub(crate) fn reparent(&mut self, i: usize, parent: usize) {
        debug_assert!(i != 0 && i != parent);
        self.entries[i].parent = parent;
    }

    /// Sum of step costs along the parent chain from `i` back to the root.
    ///
    /// Walked fresh on every call.
    pub(crate) fn accumulated_cost(&self, mut i: usize) -> i32 {
        let mut total = 0;
        while let Some(p) = self.parent(i) {
            total += step_cost(self.entries[p].pos, self.entries[i].pos);
            i = p;
        }
        total
    }

    /// Indices from `i` back to the root, `i` first.
    pub(crate) fn chain(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(Some(i), |&c| self.parent(c))
    }

    pub(crate) fn entries(&self) -> &[Entry] {
        &self.entries
    }
}
