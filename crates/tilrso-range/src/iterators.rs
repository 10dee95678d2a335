//! Carry-increment iteration over tile and element coordinates.
//!
//! [`IndexIter`] walks a rectangular coordinate box the way an odometer
//! counts: the fastest-varying axis (per the dimension-order table) is
//! incremented first, and overflow past that axis's finish bound resets the
//! axis to its start value and carries into the next axis in the table. A
//! full wraparound, carrying through every axis, parks the current
//! coordinate at the finish bound, which is the terminal state; the finish
//! coordinate itself is never yielded.
//!
//! Each step is a single pass over the order table with early exit: no
//! recursion, no allocation.
//!
//! Iterators borrow the bounds they walk (from a
//! [`TiledRange`](crate::TiledRange) or a [`Tile`](crate::Tile)) and own
//! only their current coordinate. A fresh iterator restarts the traversal;
//! an exhausted one stays exhausted.

use std::iter::FusedIterator;

use crate::coordinate::{Coord, ElementTag, TileTag};

/// Lazy, finite sequence of coordinates over a rectangular box, in
/// dimension-order.
#[derive(Debug, Clone)]
pub struct IndexIter<'a, K> {
    start: &'a Coord<K>,
    finish: &'a Coord<K>,
    order: &'a [usize],
    current: Coord<K>,
}

/// Iterator over the tile coordinates of a range.
pub type TileIter<'a> = IndexIter<'a, TileTag>;

/// Iterator over the element coordinates of a range or a tile.
pub type ElementIter<'a> = IndexIter<'a, ElementTag>;

impl<'a, K: Clone> IndexIter<'a, K> {
    pub(crate) fn new(start: &'a Coord<K>, finish: &'a Coord<K>, order: &'a [usize]) -> Self {
        debug_assert_eq!(start.rank(), finish.rank());
        debug_assert_eq!(start.rank(), order.len());
        Self {
            start,
            finish,
            order,
            current: start.clone(),
        }
    }

    /// The coordinate the iterator is positioned at. Equal to the finish
    /// bound exactly when the iterator is exhausted.
    pub fn current(&self) -> &Coord<K> {
        &self.current
    }

    fn advance(&mut self) {
        for &axis in self.order {
            self.current[axis] += 1;
            if self.current[axis] < self.finish[axis] {
                return;
            }
            self.current[axis] = self.start[axis];
        }
        // Carried through every axis: traversal complete.
        self.current = self.finish.clone();
    }
}

impl<K: Clone + PartialEq> Iterator for IndexIter<'_, K> {
    type Item = Coord<K>;

    fn next(&mut self) -> Option<Coord<K>> {
        if &self.current == self.finish {
            return None;
        }
        let item = self.current.clone();
        self.advance();
        Some(item)
    }
}

impl<K: Clone + PartialEq> FusedIterator for IndexIter<'_, K> {}

/// Two iterators compare equal when positioned at the same coordinate,
/// whatever bounds they walk.
impl<K: PartialEq> PartialEq for IndexIter<'_, K> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<K: Eq> Eq for IndexIter<'_, K> {}
