//! Trellis - derive full cursor and sequence operation surfaces from a
//! handful of primitives.
//!
//! A new iterator-like type implements the primitives of a [`cursor`] tier
//! (dereference, step, offset arithmetic) and receives the rest of that
//! tier's operations as provided methods. A new container implements cursor
//! accessors and, optionally, two mutation primitives, and [`sequence`]
//! derives iteration, element access, and the whole push/pop/insert/erase
//! convenience family. [`reverse`] and [`inline_vec`] are worked instances
//! of the two layers.
//!
//! # Quick Start
//!
//! ```
//! use trellis::{Edit, InlineVec, Sequence};
//!
//! // Four elements at most, stored in place.
//! let mut v: InlineVec<u32, 4> = InlineVec::new();
//!
//! // push/erase/emplace are all derived from two primitives.
//! v.push(1);
//! v.push(2);
//! v.push(3);
//! assert_eq!(v.as_slice(), &[1, 2, 3]);
//!
//! v.erase(1);
//! v.emplace(0, 0);
//! assert_eq!(v.as_slice(), &[0, 1, 3]);
//!
//! // So is reverse iteration.
//! let back_to_front: Vec<u32> = v.rev_iter().copied().collect();
//! assert_eq!(back_to_front, vec![3, 1, 0]);
//! ```

pub mod compat;
pub mod cursor;
pub mod inline_vec;
pub mod iter;
pub mod reverse;
pub mod sequence;
pub mod slice;

pub use cursor::{BidiCursor, ContiguousCursor, Cursor, ForwardCursor, RandomCursor};
pub use inline_vec::{CapacityError, InlineVec};
pub use iter::Iter;
pub use reverse::{Reverse, reverse};
pub use sequence::{Edit, FrontEdit, Sequence};
pub use slice::SliceCursor;
