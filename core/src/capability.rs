//! Capability probing and the fast-path view.
//!
//! Every operation inspects its input exactly once, at the start of the call,
//! and picks one of two accessors for the whole traversal:
//!
//! - **Fast**: the sequence is the canonical growable array. The live backing
//!   slice is captured once and walked with a plain slice iterator, with no
//!   per-element accessor calls.
//! - **Safe**: anything else. Elements are read through [`Sequence::get`].
//!
//! The [`View`] produced here is crate-internal. Callbacks must not change the
//! length of the sequence while a view over it is alive; the borrow checker
//! enforces this for the fast path, and for the safe path a sequence that
//! stops answering `get` simply ends the walk early.

use core::iter::{Enumerate, FusedIterator};
use core::slice;

use crate::sequence::Sequence;

/// Which accessor an operation uses for a given sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Direct access to the live backing storage.
    Fast,
    /// Generic `len`/`get`/`set` access only.
    Safe,
}

/// Classifies `seq` as [`Capability::Fast`] if it exposes its contiguous
/// backing storage, otherwise [`Capability::Safe`]. O(1), no side effects.
///
/// # Examples
///
/// ```
/// use std::collections::VecDeque;
/// use ordseq_core::{Capability, classify};
///
/// assert_eq!(classify(&vec![1, 2, 3]), Capability::Fast);
/// assert_eq!(classify(&VecDeque::from([1, 2, 3])), Capability::Safe);
/// ```
pub fn classify<S: Sequence + ?Sized>(seq: &S) -> Capability {
    if seq.contiguous().is_some() {
        Capability::Fast
    } else {
        Capability::Safe
    }
}

// ============================================================================
// View
// ============================================================================

/// Accessor chosen once for the duration of a traversal.
pub(crate) enum View<'a, S: Sequence + ?Sized> {
    Fast(&'a [S::Item]),
    Safe(&'a S),
}

impl<'a, S: Sequence + ?Sized> Clone for View<'a, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, S: Sequence + ?Sized> Copy for View<'a, S> {}

impl<'a, S: Sequence + ?Sized> View<'a, S> {
    pub(crate) fn of(seq: &'a S) -> Self {
        let view = match seq.contiguous() {
            Some(data) => View::Fast(data),
            None => View::Safe(seq),
        };
        tracing::trace!(
            capability = ?view.capability(),
            len = view.len(),
            "selected sequence accessor"
        );
        view
    }

    pub(crate) fn capability(&self) -> Capability {
        match self {
            View::Fast(_) => Capability::Fast,
            View::Safe(_) => Capability::Safe,
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            View::Fast(data) => data.len(),
            View::Safe(seq) => seq.len(),
        }
    }

    /// Ascending iterator over every element, paired with its index.
    pub(crate) fn iter(&self) -> Iter<'a, S> {
        let len = self.len();
        self.span(0, len)
    }

    /// Ascending iterator over `[from, to)`. The caller guarantees
    /// `from <= to <= len()`; reverse it for descending order.
    pub(crate) fn span(&self, from: usize, to: usize) -> Iter<'a, S> {
        debug_assert!(from <= to && to <= self.len());
        let inner = match *self {
            View::Fast(data) => IterInner::Fast {
                base: from,
                items: data[from..to].iter().enumerate(),
            },
            View::Safe(seq) => IterInner::Safe {
                seq,
                front: from,
                back: to,
            },
        };
        Iter { inner }
    }

    /// Reads every element through this view and collects owned copies.
    pub(crate) fn to_vec(&self) -> alloc::vec::Vec<S::Item>
    where
        S::Item: Clone,
    {
        match *self {
            View::Fast(data) => data.to_vec(),
            View::Safe(_) => self.iter().map(|(_, item)| item.clone()).collect(),
        }
    }
}

// ============================================================================
// Iter
// ============================================================================

/// Indexed iterator over a [`View`]; yields `(index, &element)`.
pub(crate) struct Iter<'a, S: Sequence + ?Sized> {
    inner: IterInner<'a, S>,
}

enum IterInner<'a, S: Sequence + ?Sized> {
    Fast {
        base: usize,
        items: Enumerate<slice::Iter<'a, S::Item>>,
    },
    Safe {
        seq: &'a S,
        front: usize,
        back: usize,
    },
}

impl<'a, S: Sequence + ?Sized> Iterator for Iter<'a, S> {
    type Item = (usize, &'a S::Item);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterInner::Fast { base, items } => {
                let (offset, item) = items.next()?;
                Some((*base + offset, item))
            }
            IterInner::Safe { seq, front, back } => {
                if *front >= *back {
                    return None;
                }
                let index = *front;
                match seq.get(index) {
                    Some(item) => {
                        *front += 1;
                        Some((index, item))
                    }
                    None => {
                        // The sequence shrank under us; stop instead of skipping.
                        *front = *back;
                        None
                    }
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            IterInner::Fast { items, .. } => items.size_hint(),
            IterInner::Safe { front, back, .. } => (0, Some(back.saturating_sub(*front))),
        }
    }
}

impl<'a, S: Sequence + ?Sized> DoubleEndedIterator for Iter<'a, S> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterInner::Fast { base, items } => {
                let (offset, item) = items.next_back()?;
                Some((*base + offset, item))
            }
            IterInner::Safe { seq, front, back } => {
                if *front >= *back {
                    return None;
                }
                let index = *back - 1;
                match seq.get(index) {
                    Some(item) => {
                        *back -= 1;
                        Some((index, item))
                    }
                    None => {
                        *back = *front;
                        None
                    }
                }
            }
        }
    }
}

impl<'a, S: Sequence + ?Sized> FusedIterator for Iter<'a, S> {}
