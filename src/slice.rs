//! A contiguous cursor over a borrowed slice.
//!
//! `SliceCursor` is a slice plus an index, the Rust rendition of a raw
//! element pointer. It sits at the top of the cursor ladder: every tier up to
//! [`ContiguousCursor`] is implemented, with the O(1) overrides for
//! `advance` and `distance_to`.

use std::cmp::Ordering;
use std::fmt;

use crate::cursor::{BidiCursor, ContiguousCursor, Cursor, ForwardCursor, RandomCursor};

/// A position within a borrowed slice.
///
/// Equality and ordering are position identity within the same slice, never
/// element comparison. Comparing cursors from different slices is a
/// precondition violation, as with pointers into different allocations.
pub struct SliceCursor<'a, T> {
    items: &'a [T],
    at: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Cursor at position `at` within `items`. `at == items.len()` is the
    /// one-past-the-end position.
    pub fn new(items: &'a [T], at: usize) -> SliceCursor<'a, T> {
        debug_assert!(
            at <= items.len(),
            "position {} out of bounds (len {})",
            at,
            items.len()
        );
        return SliceCursor { items, at };
    }

    /// Cursor at the start of `items`.
    pub fn head(items: &'a [T]) -> SliceCursor<'a, T> {
        return SliceCursor::new(items, 0);
    }

    /// Cursor one past the end of `items`.
    pub fn tail(items: &'a [T]) -> SliceCursor<'a, T> {
        return SliceCursor::new(items, items.len());
    }

    /// Index of this position within the underlying slice.
    pub fn index(&self) -> usize {
        return self.at;
    }

    /// The contiguous remainder of the slice, from this position to the end.
    pub fn rest(&self) -> &'a [T] {
        return &self.items[self.at..];
    }
}

// Manual impls keep `T` free of Clone/Eq bounds: copying or comparing a
// position never touches elements.

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        return *self;
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        debug_assert!(
            std::ptr::eq(self.items, other.items),
            "comparing cursors into different slices"
        );
        return self.at == other.at;
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> PartialOrd for SliceCursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        return Some(self.cmp(other));
    }
}

impl<T> Ord for SliceCursor<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        return self.order(other);
    }
}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "SliceCursor({}/{})", self.at, self.items.len());
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    fn get(&self) -> &'a T {
        return &self.items[self.at];
    }

    fn bump(&mut self) {
        debug_assert!(self.at < self.items.len(), "bump past the end");
        self.at += 1;
    }

    fn advance(&mut self, n: usize) {
        self.offset(n as isize);
    }
}

impl<T> ForwardCursor for SliceCursor<'_, T> {
    fn distance_to(&self, end: &Self) -> usize {
        debug_assert!(self.at <= end.at, "distance_to a position behind this one");
        return end.at - self.at;
    }
}

impl<T> BidiCursor for SliceCursor<'_, T> {
    fn retreat(&mut self) {
        debug_assert!(self.at > 0, "retreat past the start");
        self.at -= 1;
    }

    fn retreat_by(&mut self, n: usize) {
        self.offset(-(n as isize));
    }
}

impl<T> RandomCursor for SliceCursor<'_, T> {
    fn offset(&mut self, n: isize) {
        let moved = self.at as isize + n;
        debug_assert!(
            0 <= moved && moved <= self.items.len() as isize,
            "offset {} from position {} out of bounds (len {})",
            n,
            self.at,
            self.items.len()
        );
        self.at = moved as usize;
    }

    fn delta(&self, other: &Self) -> isize {
        return self.at as isize - other.at as isize;
    }
}

impl<T> ContiguousCursor for SliceCursor<'_, T> {}
