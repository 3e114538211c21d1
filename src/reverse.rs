//! Reverse-order cursor adapter.
//!
//! [`Reverse`] wraps a base cursor and logically stands one step before it,
//! so that stepping the adapter forward steps the base backward. It supplies
//! only dereference and the step/offset primitives mapped through the base;
//! the tier traits re-derive the rest. The base must be at least
//! bidirectional (there is no "one step before" without a backward step),
//! and the adapter keeps the base's tier above that: reversing a
//! random-access cursor yields a random-access cursor.

use std::cmp::Ordering;

use crate::cursor::{BidiCursor, Cursor, ForwardCursor, RandomCursor};

/// A cursor walking its base sequence back to front.
///
/// `Reverse::new(tail)` is the first reversed position and
/// `Reverse::new(head)` is one past the last, mirroring the half-open range
/// of the base.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Reverse<C> {
    base: C,
}

impl<C> Reverse<C> {
    /// Adapter standing one step before `base`.
    pub fn new(base: C) -> Reverse<C> {
        return Reverse { base };
    }

    /// The wrapped base position.
    pub fn base(&self) -> &C {
        return &self.base;
    }

    /// Unwrap back to the base position.
    pub fn into_inner(self) -> C {
        return self.base;
    }
}

/// Wrap a bidirectional cursor for back-to-front traversal.
pub fn reverse<C: BidiCursor>(base: C) -> Reverse<C> {
    return Reverse::new(base);
}

impl<C: BidiCursor> Cursor for Reverse<C> {
    type Item = C::Item;

    fn get(&self) -> C::Item {
        return self.base.prev_pos().get();
    }

    fn bump(&mut self) {
        self.base.retreat();
    }

    fn advance(&mut self, n: usize) {
        // Inherits the base's retreat_by, O(1) for random-access bases.
        self.base.retreat_by(n);
    }
}

impl<C: BidiCursor> ForwardCursor for Reverse<C> {
    fn distance_to(&self, end: &Self) -> usize {
        // Reversed direction: `end` is the earlier base position.
        return end.base.distance_to(&self.base);
    }
}

impl<C: BidiCursor> BidiCursor for Reverse<C> {
    fn retreat(&mut self) {
        self.base.bump();
    }

    fn retreat_by(&mut self, n: usize) {
        self.base.advance(n);
    }
}

impl<C: RandomCursor> RandomCursor for Reverse<C> {
    fn offset(&mut self, n: isize) {
        self.base.offset(-n);
    }

    fn delta(&self, other: &Self) -> isize {
        return other.base.delta(&self.base);
    }
}

impl<C: RandomCursor> PartialOrd for Reverse<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        return Some(self.order(other));
    }
}
