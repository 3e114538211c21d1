//! Sequence capability tiers and their derived operations.
//!
//! A container opts in by supplying cursor accessors ([`Sequence`]) and,
//! independently, mutation primitives ([`Edit`] for positional/back
//! mutation, [`FrontEdit`] for front mutation). Each tier's provided methods
//! are derived purely from that tier's primitives plus the cursor layer, so
//! a concrete container writes a handful of methods and receives the
//! conventional surface: emptiness/length, forward and reverse iteration,
//! element access, and the push/pop/insert/erase convenience family.
//!
//! The mutation tiers are independent flags, not a ladder: supplying back
//! mutation says nothing about the cost or correctness of front mutation,
//! so `push_front` never appears unless [`FrontEdit`] is implemented
//! separately.

use std::cmp::Ordering;
use std::ops::Range;

use crate::cursor::{BidiCursor, Cursor, ForwardCursor, RandomCursor};
use crate::iter::Iter;
use crate::reverse::Reverse;

/// The always-on tier: a sequence that can hand out cursors to its ends.
///
/// Derived read operations follow the richest tier the cursor implements;
/// the bounds on `rev_iter`, `last`, and `get` name the tier they need.
pub trait Sequence {
    type Item;

    /// The cursor type walking this sequence.
    type Cursor<'a>: ForwardCursor<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Cursor at the first element.
    fn head(&self) -> Self::Cursor<'_>;

    /// Cursor one past the last element.
    fn tail(&self) -> Self::Cursor<'_>;

    /// Whether the sequence holds no elements.
    fn is_empty(&self) -> bool {
        return self.head() == self.tail();
    }

    /// Number of elements.
    ///
    /// The default walks the cursor, O(n). Containers that track their
    /// length override this with the stored value.
    fn len(&self) -> usize {
        return self.head().distance_to(&self.tail());
    }

    /// Iterate front to back.
    fn iter(&self) -> Iter<Self::Cursor<'_>> {
        return Iter::new(self.head(), self.tail());
    }

    /// Iterate back to front, via the reverse adapter.
    fn rev_iter<'a>(&'a self) -> Iter<Reverse<Self::Cursor<'a>>>
    where
        Self::Cursor<'a>: BidiCursor,
    {
        return Iter::new(Reverse::new(self.tail()), Reverse::new(self.head()));
    }

    /// The first element, if any.
    fn first(&self) -> Option<&Self::Item> {
        if self.is_empty() {
            return None;
        }
        return Some(self.head().get());
    }

    /// The last element, if any.
    fn last<'a>(&'a self) -> Option<&'a Self::Item>
    where
        Self::Cursor<'a>: BidiCursor,
    {
        if self.is_empty() {
            return None;
        }
        return Some(self.tail().prev_pos().get());
    }

    /// The element at `index`, bounds-checked.
    fn get<'a>(&'a self, index: usize) -> Option<&'a Self::Item>
    where
        Self::Cursor<'a>: RandomCursor,
    {
        if index >= self.len() {
            return None;
        }
        return Some(self.head().shifted(index as isize).get());
    }

    /// Element-wise equality against any sequence with the same item type.
    fn eq_elems<S>(&self, other: &S) -> bool
    where
        S: Sequence<Item = Self::Item> + ?Sized,
        Self::Item: PartialEq,
    {
        return self.len() == other.len()
            && self.iter().zip(other.iter()).all(|(a, b)| a == b);
    }

    /// Lexicographic ordering against any sequence with the same item type.
    /// A strict prefix sorts first.
    fn cmp_elems<S>(&self, other: &S) -> Ordering
    where
        S: Sequence<Item = Self::Item> + ?Sized,
        Self::Item: Ord,
    {
        return self.iter().cmp(other.iter());
    }
}

/// Positional mutation tier: emplace-at-position plus erase-range.
///
/// Positions are indices into the sequence. The whole insertion/removal
/// convenience family is derived from these two primitives; bounds and
/// capacity are the concrete container's contract, not this trait's.
pub trait Edit: Sequence {
    /// Construct `value` at position `at`, shifting later elements up.
    fn emplace(&mut self, at: usize, value: Self::Item);

    /// Remove the elements in `span`, shifting later elements down.
    fn erase_span(&mut self, span: Range<usize>);

    /// Append at the back.
    fn push(&mut self, value: Self::Item) {
        let len = self.len();
        self.emplace(len, value);
    }

    /// Remove the last element. Calling this on an empty sequence is a
    /// precondition violation.
    fn pop(&mut self) {
        let len = self.len();
        debug_assert!(len > 0, "pop from an empty sequence");
        self.erase_span(len - 1..len);
    }

    /// Remove the element at `at`.
    fn erase(&mut self, at: usize) {
        self.erase_span(at..at + 1);
    }

    /// Remove every element.
    fn clear(&mut self) {
        let len = self.len();
        self.erase_span(0..len);
    }

    /// Drop elements from the back until at most `new_len` remain.
    fn truncate(&mut self, new_len: usize) {
        let len = self.len();
        if new_len < len {
            self.erase_span(new_len..len);
        }
    }

    /// Insert `count` clones of `value` at `at`.
    fn insert_fill(&mut self, at: usize, count: usize, value: Self::Item)
    where
        Self::Item: Clone,
    {
        for k in 0..count {
            self.emplace(at + k, value.clone());
        }
    }

    /// Insert every yielded value at `at`, preserving their order.
    fn insert_iter<I>(&mut self, at: usize, values: I)
    where
        I: IntoIterator<Item = Self::Item>,
    {
        for (k, value) in values.into_iter().enumerate() {
            self.emplace(at + k, value);
        }
    }

    /// Replace the whole contents with the yielded values.
    fn assign<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = Self::Item>,
    {
        self.clear();
        for value in values {
            self.push(value);
        }
    }

    /// Grow with clones of `value` or shrink from the back to `new_len`.
    fn resize(&mut self, new_len: usize, value: Self::Item)
    where
        Self::Item: Clone,
    {
        let len = self.len();
        if new_len < len {
            self.erase_span(new_len..len);
        } else {
            for _ in len..new_len {
                self.push(value.clone());
            }
        }
    }

    /// Grow with default values or shrink from the back to `new_len`.
    fn resize_default(&mut self, new_len: usize)
    where
        Self::Item: Default,
    {
        let len = self.len();
        if new_len < len {
            self.erase_span(new_len..len);
        } else {
            for _ in len..new_len {
                self.push(Self::Item::default());
            }
        }
    }
}

/// Front mutation tier, independent of [`Edit`].
pub trait FrontEdit: Sequence {
    /// Construct `value` before the first element.
    fn emplace_head(&mut self, value: Self::Item);

    /// Remove the first element.
    fn erase_head(&mut self);

    /// Prepend at the front.
    fn push_front(&mut self, value: Self::Item) {
        self.emplace_head(value);
    }

    /// Remove the first element. Calling this on an empty sequence is a
    /// precondition violation.
    fn pop_front(&mut self) {
        debug_assert!(!self.is_empty(), "pop_front from an empty sequence");
        self.erase_head();
    }
}
