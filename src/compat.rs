//! Tier impls for std sequences.
//!
//! These prove the synthesizers are not coupled to any one container:
//! slices and `Vec` compose through [`SliceCursor`], and `VecDeque` brings
//! its own [`DequeCursor`] (random-access but not contiguous) plus the front
//! mutation tier, the one std sequence that legitimately carries it.

use std::collections::VecDeque;
use std::fmt;
use std::ops::Range;

use crate::cursor::{BidiCursor, Cursor, ForwardCursor, RandomCursor};
use crate::sequence::{Edit, FrontEdit, Sequence};
use crate::slice::SliceCursor;

impl<T> Sequence for [T] {
    type Item = T;
    type Cursor<'a>
        = SliceCursor<'a, T>
    where
        Self: 'a;

    fn head(&self) -> SliceCursor<'_, T> {
        return SliceCursor::head(self);
    }

    fn tail(&self) -> SliceCursor<'_, T> {
        return SliceCursor::tail(self);
    }

    fn len(&self) -> usize {
        return self.len();
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;
    type Cursor<'a>
        = SliceCursor<'a, T>
    where
        Self: 'a;

    fn head(&self) -> SliceCursor<'_, T> {
        return SliceCursor::head(self.as_slice());
    }

    fn tail(&self) -> SliceCursor<'_, T> {
        return SliceCursor::tail(self.as_slice());
    }

    fn len(&self) -> usize {
        return self.len();
    }
}

impl<T> Edit for Vec<T> {
    fn emplace(&mut self, at: usize, value: T) {
        self.insert(at, value);
    }

    fn erase_span(&mut self, span: Range<usize>) {
        self.drain(span);
    }
}

/// A position within a borrowed `VecDeque`.
///
/// Indexed access through the deque is O(1), so the full random-access tier
/// applies, but the two halves of a deque's ring buffer are not one
/// allocation, so the contiguous tier does not.
pub struct DequeCursor<'a, T> {
    deque: &'a VecDeque<T>,
    at: usize,
}

impl<'a, T> DequeCursor<'a, T> {
    /// Cursor at position `at` within `deque`.
    pub fn new(deque: &'a VecDeque<T>, at: usize) -> DequeCursor<'a, T> {
        debug_assert!(
            at <= deque.len(),
            "position {} out of bounds (len {})",
            at,
            deque.len()
        );
        return DequeCursor { deque, at };
    }

    /// Index of this position within the deque.
    pub fn index(&self) -> usize {
        return self.at;
    }
}

impl<T> Clone for DequeCursor<'_, T> {
    fn clone(&self) -> Self {
        return *self;
    }
}

impl<T> Copy for DequeCursor<'_, T> {}

impl<T> PartialEq for DequeCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        debug_assert!(
            std::ptr::eq(self.deque, other.deque),
            "comparing cursors into different deques"
        );
        return self.at == other.at;
    }
}

impl<T> Eq for DequeCursor<'_, T> {}

impl<T> fmt::Debug for DequeCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "DequeCursor({}/{})", self.at, self.deque.len());
    }
}

impl<'a, T> Cursor for DequeCursor<'a, T> {
    type Item = &'a T;

    fn get(&self) -> &'a T {
        return &self.deque[self.at];
    }

    fn bump(&mut self) {
        debug_assert!(self.at < self.deque.len(), "bump past the end");
        self.at += 1;
    }

    fn advance(&mut self, n: usize) {
        self.offset(n as isize);
    }
}

impl<T> ForwardCursor for DequeCursor<'_, T> {
    fn distance_to(&self, end: &Self) -> usize {
        debug_assert!(self.at <= end.at, "distance_to a position behind this one");
        return end.at - self.at;
    }
}

impl<T> BidiCursor for DequeCursor<'_, T> {
    fn retreat(&mut self) {
        debug_assert!(self.at > 0, "retreat past the start");
        self.at -= 1;
    }

    fn retreat_by(&mut self, n: usize) {
        self.offset(-(n as isize));
    }
}

impl<T> RandomCursor for DequeCursor<'_, T> {
    fn offset(&mut self, n: isize) {
        let moved = self.at as isize + n;
        debug_assert!(
            0 <= moved && moved <= self.deque.len() as isize,
            "offset {} from position {} out of bounds (len {})",
            n,
            self.at,
            self.deque.len()
        );
        self.at = moved as usize;
    }

    fn delta(&self, other: &Self) -> isize {
        return self.at as isize - other.at as isize;
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;
    type Cursor<'a>
        = DequeCursor<'a, T>
    where
        Self: 'a;

    fn head(&self) -> DequeCursor<'_, T> {
        return DequeCursor::new(self, 0);
    }

    fn tail(&self) -> DequeCursor<'_, T> {
        return DequeCursor::new(self, self.len());
    }

    fn len(&self) -> usize {
        return self.len();
    }
}

impl<T> Edit for VecDeque<T> {
    fn emplace(&mut self, at: usize, value: T) {
        self.insert(at, value);
    }

    fn erase_span(&mut self, span: Range<usize>) {
        self.drain(span);
    }
}

impl<T> FrontEdit for VecDeque<T> {
    fn emplace_head(&mut self, value: T) {
        self.push_front(value);
    }

    fn erase_head(&mut self) {
        let _ = self.pop_front();
    }
}
