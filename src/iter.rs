//! Bridge from a cursor pair to `std::iter`.
//!
//! [`Iter`] holds a half-open `[at, end)` cursor range and walks it as a
//! standard iterator. This is the derived iteration surface: everything here
//! is built from forward-tier primitives, with back-iteration appearing
//! automatically once the cursor is bidirectional.

use std::iter::FusedIterator;

use crate::cursor::{BidiCursor, ForwardCursor};

/// Iterator over the half-open cursor range `[at, end)`.
#[derive(Clone, Debug)]
pub struct Iter<C> {
    at: C,
    end: C,
}

impl<C> Iter<C> {
    /// Iterator over `[at, end)`.
    pub fn new(at: C, end: C) -> Iter<C> {
        return Iter { at, end };
    }

    /// The unconsumed cursor pair.
    pub fn into_cursors(self) -> (C, C) {
        return (self.at, self.end);
    }
}

impl<C: ForwardCursor> Iterator for Iter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.at == self.end {
            return None;
        }
        let item = self.at.get();
        self.at.bump();
        return Some(item);
    }
}

impl<C: BidiCursor> DoubleEndedIterator for Iter<C> {
    fn next_back(&mut self) -> Option<C::Item> {
        if self.at == self.end {
            return None;
        }
        self.end.retreat();
        return Some(self.end.get());
    }
}

// Exhaustion is `at == end`, which later calls observe unchanged.
impl<C: ForwardCursor> FusedIterator for Iter<C> {}
