//! A fixed-capacity vector synthesized from four primitives.
//!
//! `InlineVec<T, N>` stores up to `N` elements in place, in a buffer of
//! uninitialized slots guarded by a live-length counter. It supplies only
//! construction/teardown, the contiguous slice views, an emplace-at-position
//! primitive, and an erase-range primitive; iteration, element access, the
//! push/pop/insert/resize family, and the comparisons all come from the
//! [`Sequence`]/[`Edit`] synthesizers.
//!
//! Capacity is checked: the infallible mutators panic on overflow with a
//! message, and [`try_push`](InlineVec::try_push) /
//! [`try_insert`](InlineVec::try_insert) report [`CapacityError`] instead,
//! handing the rejected value back.
//!
//! Every slot is constructed exactly once and destroyed exactly once, on
//! every insert, erase, swap, and teardown path. Only the live prefix
//! `[0, len)` is ever read.

use std::fmt;
use std::mem::{self, MaybeUninit};
use std::ops::{Index, IndexMut, Range};
use std::ptr;
use std::slice;

use crate::iter::Iter;
use crate::sequence::{Edit, Sequence};
use crate::slice::SliceCursor;

/// A mutation was rejected because the vector is at capacity.
/// Carries the value that did not fit.
pub struct CapacityError<T>(pub T);

impl<T> CapacityError<T> {
    /// Recover the value that did not fit.
    pub fn into_inner(self) -> T {
        return self.0;
    }
}

impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "CapacityError(..)");
    }
}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "fixed capacity exceeded");
    }
}

impl<T> std::error::Error for CapacityError<T> {}

/// A vector of at most `N` elements stored in place.
pub struct InlineVec<T, const N: usize> {
    slots: [MaybeUninit<T>; N],
    len: usize,
}

impl<T, const N: usize> InlineVec<T, N> {
    /// An empty vector. No elements are constructed.
    pub const fn new() -> InlineVec<T, N> {
        return InlineVec {
            slots: [const { MaybeUninit::uninit() }; N],
            len: 0,
        };
    }

    /// The fixed capacity `N`.
    pub const fn capacity(&self) -> usize {
        return N;
    }

    /// Number of live elements.
    pub const fn len(&self) -> usize {
        return self.len;
    }

    /// Whether the vector holds no elements.
    pub const fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    /// Remaining room before the capacity is reached.
    pub const fn spare(&self) -> usize {
        return N - self.len;
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // The prefix [0, len) is always initialized.
        return unsafe { slice::from_raw_parts(self.slots.as_ptr() as *const T, self.len) };
    }

    /// The live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        return unsafe {
            slice::from_raw_parts_mut(self.slots.as_mut_ptr() as *mut T, self.len)
        };
    }

    /// Append `value`, or hand it back if the vector is full.
    pub fn try_push(&mut self, value: T) -> Result<(), CapacityError<T>> {
        return self.try_insert(self.len, value);
    }

    /// Insert `value` at `at`, or hand it back if the vector is full.
    /// `at > len` is still a panic: only capacity is reported, bounds are a
    /// caller contract.
    pub fn try_insert(&mut self, at: usize, value: T) -> Result<(), CapacityError<T>> {
        assert!(
            at <= self.len,
            "insert position {} out of bounds (len {})",
            at,
            self.len
        );
        if self.len == N {
            return Err(CapacityError(value));
        }
        self.emplace(at, value);
        return Ok(());
    }

    /// Exchange the contents of two vectors, which may hold different
    /// numbers of elements.
    pub fn swap(&mut self, other: &mut InlineVec<T, N>) {
        let shared = self.len.min(other.len);
        for i in 0..shared {
            mem::swap(&mut self.as_mut_slice()[i], &mut other.as_mut_slice()[i]);
        }
        if self.len < other.len {
            InlineVec::move_tail(other, self, shared);
        } else {
            InlineVec::move_tail(self, other, shared);
        }
    }

    /// Move the elements of `longer` at positions `from..` onto the back of
    /// `shorter`.
    fn move_tail(longer: &mut InlineVec<T, N>, shorter: &mut InlineVec<T, N>, from: usize) {
        let old_len = longer.len;
        // Give up ownership of the tail before reading it out, so the moved
        // slots are never seen as live by both vectors.
        longer.len = from;
        let base = longer.slots.as_ptr() as *const T;
        for i in from..old_len {
            let value = unsafe { ptr::read(base.add(i)) };
            shorter.push(value);
        }
    }
}

impl<T, const N: usize> Sequence for InlineVec<T, N> {
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
        return self.len;
    }
}

impl<T, const N: usize> Edit for InlineVec<T, N> {
    fn emplace(&mut self, at: usize, value: T) {
        assert!(
            at <= self.len,
            "insert position {} out of bounds (len {})",
            at,
            self.len
        );
        assert!(
            self.len < N,
            "capacity overflow: InlineVec<_, {}> is full",
            N
        );
        let base = self.slots.as_mut_ptr() as *mut T;
        unsafe {
            // Shift the tail up one slot. A Rust move is a bitwise copy that
            // vacates the source, so the overlapping copy is the whole
            // move-construct/move-assign shuffle in one step.
            ptr::copy(base.add(at), base.add(at + 1), self.len - at);
            ptr::write(base.add(at), value);
        }
        self.len += 1;
    }

    fn erase_span(&mut self, span: Range<usize>) {
        let Range { start, end } = span;
        assert!(
            start <= end && end <= self.len,
            "erase span {}..{} out of bounds (len {})",
            start,
            end,
            self.len
        );
        let old_len = self.len;
        // Hold len at the untouched prefix while dropping: a panicking Drop
        // then leaks the tail instead of double-dropping it.
        self.len = start;
        let base = self.slots.as_mut_ptr() as *mut T;
        unsafe {
            for i in start..end {
                ptr::drop_in_place(base.add(i));
            }
            ptr::copy(base.add(end), base.add(start), old_len - end);
        }
        self.len = old_len - (end - start);
    }
}

impl<T, const N: usize> Drop for InlineVec<T, N> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(self.as_mut_slice());
        }
    }
}

impl<T, const N: usize> Default for InlineVec<T, N> {
    fn default() -> InlineVec<T, N> {
        return InlineVec::new();
    }
}

impl<T: Clone, const N: usize> Clone for InlineVec<T, N> {
    fn clone(&self) -> InlineVec<T, N> {
        let mut out = InlineVec::new();
        out.assign(self.iter().cloned());
        return out;
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for InlineVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.as_slice()).finish();
    }
}

impl<T, const N: usize> FromIterator<T> for InlineVec<T, N> {
    /// Collect into an inline vector. Panics if the iterator yields more
    /// than `N` elements, like `push`.
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> InlineVec<T, N> {
        let mut out = InlineVec::new();
        for value in values {
            out.push(value);
        }
        return out;
    }
}

impl<T, const N: usize> Extend<T> for InlineVec<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.push(value);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for InlineVec<T, N> {
    fn from(values: [T; N]) -> InlineVec<T, N> {
        let mut out = InlineVec::new();
        for value in values {
            out.push(value);
        }
        return out;
    }
}

impl<T, const N: usize> Index<usize> for InlineVec<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        return &self.as_slice()[index];
    }
}

impl<T, const N: usize> IndexMut<usize> for InlineVec<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        return &mut self.as_mut_slice()[index];
    }
}

impl<T: PartialEq, const N: usize> PartialEq for InlineVec<T, N> {
    fn eq(&self, other: &InlineVec<T, N>) -> bool {
        return self.eq_elems(other);
    }
}

impl<T: Eq, const N: usize> Eq for InlineVec<T, N> {}

impl<T: PartialOrd, const N: usize> PartialOrd for InlineVec<T, N> {
    fn partial_cmp(&self, other: &InlineVec<T, N>) -> Option<std::cmp::Ordering> {
        return self.iter().partial_cmp(other.iter());
    }
}

impl<T: Ord, const N: usize> Ord for InlineVec<T, N> {
    fn cmp(&self, other: &InlineVec<T, N>) -> std::cmp::Ordering {
        return self.cmp_elems(other);
    }
}

impl<T: std::hash::Hash, const N: usize> std::hash::Hash for InlineVec<T, N> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a InlineVec<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<SliceCursor<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        return self.iter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let v: InlineVec<u32, 4> = InlineVec::new();
        assert!(v.is_empty());
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 4);
        assert_eq!(v.as_slice(), &[]);
    }

    #[test]
    fn push_fills_in_order() {
        let mut v: InlineVec<u32, 4> = InlineVec::new();
        v.push(1);
        v.push(2);
        v.push(3);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        assert_eq!(v.spare(), 1);
    }

    #[test]
    fn emplace_shifts_the_tail() {
        let mut v: InlineVec<u32, 4> = InlineVec::from_iter([1, 3, 4]);
        v.emplace(1, 2);
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn erase_span_slides_survivors_down() {
        let mut v: InlineVec<u32, 6> = InlineVec::from_iter([1, 2, 3, 4, 5]);
        v.erase_span(1..4);
        assert_eq!(v.as_slice(), &[1, 5]);
    }

    #[test]
    fn try_push_reports_overflow_and_returns_the_value() {
        let mut v: InlineVec<u32, 2> = InlineVec::from_iter([1, 2]);
        let err = v.try_push(9).unwrap_err();
        assert_eq!(err.into_inner(), 9);
        assert_eq!(v.as_slice(), &[1, 2]);
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn push_panics_on_overflow() {
        let mut v: InlineVec<u32, 1> = InlineVec::new();
        v.push(1);
        v.push(2);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn emplace_panics_past_the_end() {
        let mut v: InlineVec<u32, 4> = InlineVec::new();
        v.emplace(1, 5);
    }

    #[test]
    fn indexing_and_iteration() {
        let mut v: InlineVec<u32, 4> = InlineVec::from_iter([5, 6, 7]);
        assert_eq!(v[1], 6);
        v[1] = 9;
        assert_eq!(v[1], 9);

        let forward: Vec<u32> = (&v).into_iter().copied().collect();
        assert_eq!(forward, vec![5, 9, 7]);
        let backward: Vec<u32> = v.rev_iter().copied().collect();
        assert_eq!(backward, vec![7, 9, 5]);
    }

    #[test]
    fn clone_and_comparisons() {
        let v: InlineVec<u32, 4> = InlineVec::from_iter([1, 2, 3]);
        let w = v.clone();
        assert_eq!(v, w);
        assert_eq!(format!("{:?}", v), "[1, 2, 3]");

        let shorter: InlineVec<u32, 4> = InlineVec::from_iter([1, 2]);
        assert!(shorter < v);
        let bigger: InlineVec<u32, 4> = InlineVec::from_iter([1, 4]);
        assert!(v < bigger);
    }

    #[test]
    fn swap_exchanges_unequal_lengths() {
        let mut a: InlineVec<u32, 4> = InlineVec::from_iter([1, 2, 3, 4]);
        let mut b: InlineVec<u32, 4> = InlineVec::from_iter([9, 8]);
        a.swap(&mut b);
        assert_eq!(a.as_slice(), &[9, 8]);
        assert_eq!(b.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn derived_resize_and_assign() {
        let mut v: InlineVec<u32, 6> = InlineVec::new();
        v.resize(4, 7);
        assert_eq!(v.as_slice(), &[7, 7, 7, 7]);
        v.resize(2, 0);
        assert_eq!(v.as_slice(), &[7, 7]);
        v.assign([1, 2, 3]);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        v.resize_default(5);
        assert_eq!(v.as_slice(), &[1, 2, 3, 0, 0]);
    }
}
