//! Cursor capability tiers and their derived operations.
//!
//! A cursor is a position in some sequence. A type opts into a tier by
//! implementing that tier's trait; the required methods are the primitives,
//! and every provided method is derived purely from primitives and lower-tier
//! derived operations. The tiers form a strict ladder:
//!
//! - [`Cursor`]: dereference + single forward step.
//! - [`ForwardCursor`]: adds position copying and equality.
//! - [`BidiCursor`]: adds a single backward step.
//! - [`RandomCursor`]: adds signed offset arithmetic and position difference.
//! - [`ContiguousCursor`]: marker, positions are backed by one allocation.
//!
//! Claiming a tier without its primitives is a compile error at the impl
//! site, so a half-equipped type can never reach a derived operation it
//! cannot support.

use std::cmp::Ordering;

/// The input tier: a position that can be read and stepped forward.
///
/// `Item` is whatever dereferencing produces: usually a reference into the
/// underlying sequence, but proxy values work too.
pub trait Cursor {
    type Item;

    /// Read the element at this position.
    fn get(&self) -> Self::Item;

    /// Step forward by one position.
    fn bump(&mut self);

    /// Step forward by `n` positions.
    ///
    /// The default is a loop of [`bump`](Cursor::bump). Random-access
    /// cursors override it with O(1) offset arithmetic.
    fn advance(&mut self, n: usize) {
        for _ in 0..n {
            self.bump();
        }
    }
}

/// The forward tier: positions can be copied and compared for equality.
///
/// `Clone` and `PartialEq` are the distinguishing primitives; inequality
/// comes with `PartialEq` for free.
pub trait ForwardCursor: Cursor + Clone + PartialEq {
    /// Step forward, returning a copy of the position before the step.
    fn post_bump(&mut self) -> Self {
        let old = self.clone();
        self.bump();
        return old;
    }

    /// The position one step forward of this one.
    fn next_pos(&self) -> Self {
        let mut next = self.clone();
        next.bump();
        return next;
    }

    /// Number of forward steps from this position to `end`.
    ///
    /// The default counts one step at a time. Random-access cursors
    /// override it with [`delta`](RandomCursor::delta).
    fn distance_to(&self, end: &Self) -> usize {
        let mut cur = self.clone();
        let mut count = 0usize;
        while cur != *end {
            cur.bump();
            count += 1;
        }
        return count;
    }
}

/// The bidirectional tier: adds a single backward step.
pub trait BidiCursor: ForwardCursor {
    /// Step backward by one position.
    fn retreat(&mut self);

    /// Step backward by `n` positions.
    fn retreat_by(&mut self, n: usize) {
        for _ in 0..n {
            self.retreat();
        }
    }

    /// Step backward, returning a copy of the position before the step.
    fn post_retreat(&mut self) -> Self {
        let old = self.clone();
        self.retreat();
        return old;
    }

    /// The position one step back of this one.
    fn prev_pos(&self) -> Self {
        let mut prev = self.clone();
        prev.retreat();
        return prev;
    }
}

/// The random-access tier: signed offsets and position differences.
///
/// Both primitives are required together. A type with only one of the two
/// cannot do full position arithmetic and stays below this tier.
pub trait RandomCursor: BidiCursor {
    /// Move this position by a signed offset.
    fn offset(&mut self, n: isize);

    /// Signed number of steps from `other` to `self` (`self - other`).
    fn delta(&self, other: &Self) -> isize;

    /// The position `n` steps away (`n` may be negative).
    fn shifted(&self, n: isize) -> Self {
        let mut cur = self.clone();
        cur.offset(n);
        return cur;
    }

    /// Read the element `n` steps away, like subscripting.
    fn at_offset(&self, n: isize) -> Self::Item {
        return self.shifted(n).get();
    }

    /// Ordering of two positions in the same sequence, from the sign of
    /// their difference.
    fn order(&self, other: &Self) -> Ordering {
        return self.delta(other).cmp(&0);
    }
}

/// Marker tier: the positions this cursor walks live in a single contiguous
/// allocation, in walk order.
pub trait ContiguousCursor: RandomCursor {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Input-tier only: no Clone, no PartialEq. Yields successive integers.
    struct Counting {
        value: u64,
    }

    /// Full random-access cursor over the integers themselves.
    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    struct Step {
        at: i64,
    }

    impl Cursor for Counting {
        type Item = u64;

        fn get(&self) -> u64 {
            return self.value;
        }

        fn bump(&mut self) {
            self.value += 1;
        }
    }

    impl Cursor for Step {
        type Item = i64;

        fn get(&self) -> i64 {
            return self.at;
        }

        fn bump(&mut self) {
            self.at += 1;
        }
    }

    impl ForwardCursor for Step {}

    impl BidiCursor for Step {
        fn retreat(&mut self) {
            self.at -= 1;
        }
    }

    impl RandomCursor for Step {
        fn offset(&mut self, n: isize) {
            self.at += n as i64;
        }

        fn delta(&self, other: &Self) -> isize {
            return (self.at - other.at) as isize;
        }
    }

    #[test]
    fn input_tier_derives_advance() {
        let mut cur = Counting { value: 0 };
        cur.advance(5);
        assert_eq!(cur.get(), 5);
    }

    #[test]
    fn post_bump_returns_prior_position() {
        let mut cur = Step { at: 3 };
        let before = cur;
        let old = cur.post_bump();
        assert_eq!(old, before);
        assert_eq!(cur, before.next_pos());
    }

    #[test]
    fn post_retreat_returns_prior_position() {
        let mut cur = Step { at: 3 };
        let before = cur;
        let old = cur.post_retreat();
        assert_eq!(old, before);
        assert_eq!(cur, before.prev_pos());
    }

    #[test]
    fn bump_retreat_round_trip() {
        let mut cur = Step { at: 7 };
        cur.bump();
        cur.retreat();
        assert_eq!(cur, Step { at: 7 });
        cur.retreat();
        cur.bump();
        assert_eq!(cur, Step { at: 7 });
    }

    #[test]
    fn distance_counts_steps() {
        let a = Step { at: 2 };
        let b = Step { at: 9 };
        assert_eq!(a.distance_to(&b), 7);
        assert_eq!(a.distance_to(&a), 0);
    }

    #[test]
    fn shifted_and_delta_agree() {
        let a = Step { at: 0 };
        for n in -4..=4 {
            assert_eq!(a.shifted(n).delta(&a), n);
        }
    }

    #[test]
    fn at_offset_matches_advance_then_get() {
        let a = Step { at: 10 };
        let mut walked = a;
        walked.advance(3);
        assert_eq!(a.at_offset(3), walked.get());
    }

    #[test]
    fn order_follows_delta_sign() {
        let a = Step { at: 1 };
        let b = Step { at: 5 };
        assert_eq!(a.order(&b), Ordering::Less);
        assert_eq!(b.order(&a), Ordering::Greater);
        assert_eq!(a.order(&a), Ordering::Equal);
    }
}
