//! Immutable stacks of unboxed numbers with a stable serialized form.
//!
//! ```
//! use ordseq_primitive_stack::ImmutableIntStack;
//!
//! let stack = ImmutableIntStack::new_stack_with(&[1, 2, 3]);
//! let bytes = stack.to_bytes().unwrap();
//! let restored = ImmutableIntStack::from_bytes(&bytes).unwrap();
//!
//! assert_eq!(restored, stack);
//! assert_eq!(restored.to_vec(), [3, 2, 1]);
//! ```
#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod error;
pub mod primitive;
pub mod proxy;
pub mod stack;

pub use error::{FormatError, StackError};
pub use primitive::StackPrimitive;
pub use proxy::{HEADER_LEN, SERIAL_VERSION, StackSerializationProxy};
pub use stack::{
    INLINE_CAPACITY, ImmutableArrayStack, ImmutableByteStack, ImmutableCharStack,
    ImmutableDoubleStack, ImmutableFloatStack, ImmutableIntStack, ImmutableLongStack,
    ImmutableShortStack,
};
