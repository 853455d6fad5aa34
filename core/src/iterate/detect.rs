//! Searching and quantifiers.
//!
//! All of these stop at the first element that decides the answer.

use crate::capability::View;
use crate::sequence::Sequence;

/// First element satisfying `predicate`, or `None`.
///
/// # Examples
///
/// ```
/// use ordseq_core::iterate::detect;
///
/// let seq = vec![1, 4, 6, 7];
/// assert_eq!(detect(&seq, |x| x % 2 == 0), Some(&4));
/// assert_eq!(detect(&seq, |x| *x > 10), None);
/// ```
pub fn detect<'a, S, F>(seq: &'a S, mut predicate: F) -> Option<&'a S::Item>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> bool,
{
    View::of(seq)
        .iter()
        .find(|(_, item)| predicate(item))
        .map(|(_, item)| item)
}

pub fn detect_with<'a, S, P, F>(seq: &'a S, mut predicate: F, parameter: &P) -> Option<&'a S::Item>
where
    S: Sequence + ?Sized,
    P: ?Sized,
    F: FnMut(&S::Item, &P) -> bool,
{
    detect(seq, |item| predicate(item, parameter))
}

/// Like [`detect`], but evaluates `if_none` when nothing matches.
pub fn detect_if_none<S, F, D>(seq: &S, predicate: F, if_none: D) -> S::Item
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item) -> bool,
    D: FnOnce() -> S::Item,
{
    detect(seq, predicate).cloned().unwrap_or_else(if_none)
}

pub fn detect_with_if_none<S, P, F, D>(seq: &S, mut predicate: F, parameter: &P, if_none: D) -> S::Item
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    P: ?Sized,
    F: FnMut(&S::Item, &P) -> bool,
    D: FnOnce() -> S::Item,
{
    detect_if_none(seq, |item| predicate(item, parameter), if_none)
}

/// Index of the first element satisfying `predicate`, or `-1` if none does.
pub fn detect_index<S, F>(seq: &S, mut predicate: F) -> isize
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> bool,
{
    View::of(seq)
        .iter()
        .find(|(_, item)| predicate(item))
        .and_then(|(index, _)| isize::try_from(index).ok())
        .unwrap_or(-1)
}

pub fn detect_index_with<S, P, F>(seq: &S, mut predicate: F, parameter: &P) -> isize
where
    S: Sequence + ?Sized,
    P: ?Sized,
    F: FnMut(&S::Item, &P) -> bool,
{
    detect_index(seq, |item| predicate(item, parameter))
}

// ============================================================================
// Quantifiers
// ============================================================================

/// `true` if any element satisfies `predicate`; `false` on an empty sequence.
pub fn any_satisfy<S, F>(seq: &S, mut predicate: F) -> bool
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> bool,
{
    View::of(seq).iter().any(|(_, item)| predicate(item))
}

/// `true` if every element satisfies `predicate`; vacuously `true` when empty.
pub fn all_satisfy<S, F>(seq: &S, mut predicate: F) -> bool
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> bool,
{
    View::of(seq).iter().all(|(_, item)| predicate(item))
}

/// `true` if no element satisfies `predicate`; vacuously `true` when empty.
pub fn none_satisfy<S, F>(seq: &S, predicate: F) -> bool
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> bool,
{
    !any_satisfy(seq, predicate)
}

pub fn any_satisfy_with<S, P, F>(seq: &S, mut predicate: F, parameter: &P) -> bool
where
    S: Sequence + ?Sized,
    P: ?Sized,
    F: FnMut(&S::Item, &P) -> bool,
{
    any_satisfy(seq, |item| predicate(item, parameter))
}

pub fn all_satisfy_with<S, P, F>(seq: &S, mut predicate: F, parameter: &P) -> bool
where
    S: Sequence + ?Sized,
    P: ?Sized,
    F: FnMut(&S::Item, &P) -> bool,
{
    all_satisfy(seq, |item| predicate(item, parameter))
}

pub fn none_satisfy_with<S, P, F>(seq: &S, mut predicate: F, parameter: &P) -> bool
where
    S: Sequence + ?Sized,
    P: ?Sized,
    F: FnMut(&S::Item, &P) -> bool,
{
    none_satisfy(seq, |item| predicate(item, parameter))
}

#[cfg(test)]
#[path = "detect_test.rs"]
mod detect_test;
