//! Immutable LIFO stacks of unboxed numbers.
//!
//! A stack is built once and never changes. `push`/`pop` return a new stack
//! and leave the receiver untouched.
//!
//! # Storage Layout
//!
//! Elements are stored bottom-first, so the top of the stack is the last
//! element of the backing buffer:
//!
//! ```text
//! new_stack_with(&[1, 2, 3])
//!
//!   elements: [1, 2, 3]
//!                     ^ top
//!   pop order: 3, 2, 1
//! ```
//!
//! Everything that leaves the stack (iteration, `to_vec`, `peek_n`, the
//! serialized form) is top-first instead, so callers never see the layout.

use alloc::vec::Vec;
use core::fmt;

use smallvec::SmallVec;

use crate::error::{FormatError, StackError};
use crate::primitive::StackPrimitive;
use crate::proxy::StackSerializationProxy;

/// Elements kept inline before the buffer spills to the heap.
pub const INLINE_CAPACITY: usize = 8;

/// Immutable stack of `T`, compared structurally in pop order.
pub struct ImmutableArrayStack<T: StackPrimitive> {
    elements: SmallVec<[T; INLINE_CAPACITY]>,
}

pub type ImmutableByteStack = ImmutableArrayStack<i8>;
pub type ImmutableShortStack = ImmutableArrayStack<i16>;
/// Stack of UTF-16 code units.
pub type ImmutableCharStack = ImmutableArrayStack<u16>;
pub type ImmutableIntStack = ImmutableArrayStack<i32>;
pub type ImmutableLongStack = ImmutableArrayStack<i64>;
pub type ImmutableFloatStack = ImmutableArrayStack<f32>;
pub type ImmutableDoubleStack = ImmutableArrayStack<f64>;

static_assertions::assert_impl_all!(ImmutableIntStack: Send, Sync, Clone);
static_assertions::assert_impl_all!(ImmutableDoubleStack: Send, Sync, Clone, Eq);

impl<T: StackPrimitive> ImmutableArrayStack<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    pub const fn empty() -> Self {
        Self {
            elements: SmallVec::new_const(),
        }
    }

    /// Builds a stack by pushing `items` in order; the last item is the top.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordseq_primitive_stack::ImmutableIntStack;
    ///
    /// let stack = ImmutableIntStack::new_stack_with(&[1, 2, 3]);
    /// assert_eq!(stack.peek(), Ok(3));
    /// assert_eq!(stack.pop().unwrap().peek(), Ok(2));
    /// ```
    pub fn new_stack_with(items: &[T]) -> Self {
        Self {
            elements: SmallVec::from_slice(items),
        }
    }

    /// Builds a stack whose top is `items[0]`.
    pub fn new_stack_from_top_to_bottom(items: &[T]) -> Self {
        items.iter().rev().copied().collect()
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The top element.
    pub fn peek(&self) -> Result<T, StackError> {
        self.elements.last().copied().ok_or(StackError::Empty)
    }

    /// The top `count` elements, top-first.
    pub fn peek_n(&self, count: usize) -> Result<Vec<T>, StackError> {
        self.check_available(count)?;
        Ok(self.iter().take(count).collect())
    }

    /// The element `index` positions below the top; `peek_at(0) == peek()`.
    pub fn peek_at(&self, index: usize) -> Result<T, StackError> {
        let len = self.len();
        index
            .checked_add(1)
            .and_then(|depth| len.checked_sub(depth))
            .map(|slot| self.elements[slot])
            .ok_or(StackError::IndexOutOfBounds { index, len })
    }

    /// Elements in pop order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = T> + ExactSizeIterator + '_ {
        self.elements.iter().rev().copied()
    }

    /// Elements in pop order.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    // ========================================================================
    // Persistent updates
    // ========================================================================

    /// A new stack with `value` on top.
    pub fn push(&self, value: T) -> Self {
        let mut elements = SmallVec::with_capacity(self.len() + 1);
        elements.extend_from_slice(&self.elements);
        elements.push(value);
        Self { elements }
    }

    /// A new stack without the top element.
    pub fn pop(&self) -> Result<Self, StackError> {
        if self.is_empty() {
            return Err(StackError::Empty);
        }
        self.pop_n(1)
    }

    /// A new stack without the top `count` elements.
    pub fn pop_n(&self, count: usize) -> Result<Self, StackError> {
        self.check_available(count)?;
        let keep = self.len() - count;
        Ok(Self::new_stack_with(&self.elements[..keep]))
    }

    fn check_available(&self, requested: usize) -> Result<(), StackError> {
        if requested > self.len() {
            return Err(StackError::InsufficientElements {
                requested,
                available: self.len(),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Serialized form
    // ========================================================================

    /// Encodes the stack in its versioned binary form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, FormatError> {
        StackSerializationProxy::encode(self).to_bytes()
    }

    /// Decodes a stack produced by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FormatError> {
        StackSerializationProxy::from_bytes(bytes)?.decode()
    }
}

// ============================================================================
// Trait impls
// ============================================================================

impl<T: StackPrimitive> Default for ImmutableArrayStack<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: StackPrimitive> Clone for ImmutableArrayStack<T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
        }
    }
}

/// Elements are compared with [`StackPrimitive::same`], so a float stack
/// holding NaN equals its own copy.
impl<T: StackPrimitive> PartialEq for ImmutableArrayStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .elements
                .iter()
                .zip(&other.elements)
                .all(|(a, b)| a.same(*b))
    }
}

impl<T: StackPrimitive> Eq for ImmutableArrayStack<T> {}

impl<T: StackPrimitive> fmt::Debug for ImmutableArrayStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Pushes the items in iteration order.
impl<T: StackPrimitive> FromIterator<T> for ImmutableArrayStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[path = "stack_test.rs"]
mod stack_test;
