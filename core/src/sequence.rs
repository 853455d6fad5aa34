//! Index-addressable sequences.
//!
//! [`Sequence`] is the generic accessor contract every operation in this crate
//! accepts: a live length plus positional reads. [`SequenceMut`] adds the
//! positional writes needed by the in-place operations (`remove_if`,
//! `sort_this`).
//!
//! Both traits carry a *contiguous-storage* probe that defaults to `None`.
//! Only the canonical growable array, [`Vec`], answers it, which is what makes
//! a sequence eligible for the fast path (see [`crate::capability`]). A
//! newtype that wraps a `Vec` and forwards the accessor methods without
//! forwarding the probe is treated like any other opaque sequence.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

/// Ordered, index-addressable sequence. Valid indices are `[0, len())`.
pub trait Sequence {
    type Item;

    fn len(&self) -> usize;

    /// Returns the element at `index`, or `None` when `index >= len()`.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Live backing storage, if this is the canonical growable array.
    fn contiguous(&self) -> Option<&[Self::Item]> {
        None
    }
}

/// A [`Sequence`] whose elements can be overwritten, reordered and truncated.
pub trait SequenceMut: Sequence {
    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn set(&mut self, index: usize, value: Self::Item) -> Self::Item;

    /// Swaps the elements at `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    fn swap(&mut self, a: usize, b: usize);

    /// Shortens the sequence to `len` elements, dropping the rest.
    fn truncate(&mut self, len: usize);

    /// Mutable access to the backing growable array, if this is one.
    fn contiguous_mut(&mut self) -> Option<&mut Vec<Self::Item>> {
        None
    }
}

// ============================================================================
// Vec: the canonical growable array
// ============================================================================

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    fn contiguous(&self) -> Option<&[T]> {
        Some(self.as_slice())
    }
}

impl<T> SequenceMut for Vec<T> {
    fn set(&mut self, index: usize, value: T) -> T {
        core::mem::replace(&mut self[index], value)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }

    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len);
    }

    #[inline]
    fn contiguous_mut(&mut self) -> Option<&mut Vec<T>> {
        Some(self)
    }
}

// ============================================================================
// VecDeque: ring buffer, generic accessor only
// ============================================================================

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }
}

impl<T> SequenceMut for VecDeque<T> {
    fn set(&mut self, index: usize, value: T) -> T {
        core::mem::replace(&mut self[index], value)
    }

    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }

    fn truncate(&mut self, len: usize) {
        VecDeque::truncate(self, len);
    }
}
