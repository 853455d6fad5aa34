//! Ordered-sequence operations with a capability-probed fast path.
//!
//! Operations accept anything implementing [`Sequence`]. When the input is the
//! canonical growable array ([`Vec`](alloc::vec::Vec)) they walk its backing
//! slice directly; otherwise they go through the generic `len`/`get`
//! accessors. Either way the observable result is the same.
//!
//! ```
//! use std::collections::VecDeque;
//! use ordseq_core::iterate::{select, sort_this};
//!
//! let mut fast = vec![3, 1, 2];
//! let mut safe = VecDeque::from([3, 1, 2]);
//! sort_this(&mut fast);
//! sort_this(&mut safe);
//! assert_eq!(fast, [1, 2, 3]);
//! assert_eq!(safe, [1, 2, 3]);
//!
//! assert_eq!(select(&safe, |x| *x > 1), [2, 3]);
//! ```
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod capability;
pub mod error;
pub mod iterate;
pub mod multimap;
pub mod sequence;
pub mod traversal;

pub use capability::{Capability, classify};
pub use error::IterateError;
pub use multimap::{ListMultimap, MultimapBuilder};
pub use sequence::{Sequence, SequenceMut};
pub use traversal::{traverse, try_traverse};
