//! Ordseq - Higher-order operations over ordered sequences
//!
//! # Overview
//!
//! Ordseq provides traversal, filtering, searching, folding, grouping and
//! in-place mutation over any index-addressable sequence, plus a family of
//! immutable stacks of unboxed numbers with a stable binary form.
//!
//! # Quick Start
//!
//! ```
//! use ordseq::iterate::{detect_index, group_by, remove_if, sort_this, take, drop};
//!
//! let mut seq = vec![2, 3, 4, 1, 5, 7, 6, 9, 8];
//! sort_this(&mut seq);
//! assert_eq!(seq, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
//!
//! assert_eq!(detect_index(&seq, |x| *x > 4), 4);
//! assert_eq!(detect_index(&seq, |x| *x > 9), -1);
//!
//! let parity = group_by(&seq, |x| x % 2);
//! assert_eq!(parity.get(&0), [2, 4, 6, 8]);
//!
//! let mut head = take(&seq, 3).unwrap();
//! head.extend(drop(&seq, 3).unwrap());
//! assert_eq!(head, seq);
//!
//! remove_if(&mut seq, |x| *x > 3);
//! assert_eq!(seq, [1, 2, 3]);
//! ```
//!
//! # Fast and Safe Paths
//!
//! Every operation classifies its input once:
//!
//! 1. **Fast** (`Vec`): the live backing slice is walked directly
//! 2. **Safe** (anything else implementing [`Sequence`]): elements are read
//!    through `len`/`get` and written through `set`/`swap`/`truncate`
//!
//! Results are identical on both paths. A wrapper type gets the safe path by
//! implementing [`Sequence`] (and [`SequenceMut`] for in-place operations):
//!
//! ```
//! use ordseq::{Capability, Sequence, classify, traverse};
//!
//! struct Evens(Vec<u32>);
//!
//! impl Sequence for Evens {
//!     type Item = u32;
//!     fn len(&self) -> usize {
//!         self.0.len()
//!     }
//!     fn get(&self, index: usize) -> Option<&u32> {
//!         self.0.get(index)
//!     }
//! }
//!
//! let evens = Evens(vec![0, 2, 4, 6]);
//! assert_eq!(classify(&evens), Capability::Safe);
//!
//! let mut seen = Vec::new();
//! traverse(&evens, 3, 0, |x, _| seen.push(*x)).unwrap();
//! assert_eq!(seen, [6, 4, 2, 0]);
//! assert!(traverse(&evens, 3, -1, |_, _| {}).is_err());
//! ```
//!
//! # Immutable Stacks
//!
//! ```
//! use ordseq::stack::ImmutableIntStack;
//!
//! let stack = ImmutableIntStack::new_stack_with(&[1, 2, 3]);
//! assert_eq!(stack.peek(), Ok(3));
//!
//! let restored = ImmutableIntStack::from_bytes(&stack.to_bytes().unwrap()).unwrap();
//! assert_eq!(restored.to_vec(), [3, 2, 1]);
//! ```

// Re-export the operation library and sequence traits from ordseq_core
pub use ordseq_core::iterate;
pub use ordseq_core::{
    Capability, IterateError, ListMultimap, MultimapBuilder, Sequence, SequenceMut, classify,
    traverse, try_traverse,
};

/// Immutable primitive stacks and their serialized form.
pub mod stack {
    pub use ordseq_primitive_stack::*;
}
