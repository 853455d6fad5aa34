//! Filtering: select, reject, partition, distinct and counting.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashSet;

use crate::capability::View;
use crate::sequence::Sequence;

/// Two ordered groups produced by a single pass over a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Partition<T> {
    /// Elements that satisfied the predicate, in encounter order.
    pub selected: Vec<T>,
    /// Elements that did not, in encounter order.
    pub rejected: Vec<T>,
}

impl<T> Partition<T> {
    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.selected, self.rejected)
    }
}

// ============================================================================
// Select / reject
// ============================================================================

/// Clones every element satisfying `predicate` into a new vector.
///
/// # Examples
///
/// ```
/// use ordseq_core::iterate::select;
///
/// let evens = select(&vec![1, 2, 3, 4], |x| x % 2 == 0);
/// assert_eq!(evens, [2, 4]);
/// ```
pub fn select<S, F>(seq: &S, predicate: F) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item) -> bool,
{
    let mut out = Vec::new();
    select_into(seq, predicate, &mut out);
    out
}

/// Appends every element satisfying `predicate` to `target`.
pub fn select_into<S, F, C>(seq: &S, mut predicate: F, target: &mut C)
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item) -> bool,
    C: Extend<S::Item>,
{
    target.extend(
        View::of(seq)
            .iter()
            .filter(|(_, item)| predicate(item))
            .map(|(_, item)| item.clone()),
    );
}

pub fn reject<S, F>(seq: &S, predicate: F) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item) -> bool,
{
    let mut out = Vec::new();
    reject_into(seq, predicate, &mut out);
    out
}

pub fn reject_into<S, F, C>(seq: &S, mut predicate: F, target: &mut C)
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item) -> bool,
    C: Extend<S::Item>,
{
    select_into(seq, |item| !predicate(item), target);
}

/// [`select`] with a binary predicate receiving `parameter` on every call.
pub fn select_with<S, P, F>(seq: &S, mut predicate: F, parameter: &P) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    P: ?Sized,
    F: FnMut(&S::Item, &P) -> bool,
{
    select(seq, |item| predicate(item, parameter))
}

pub fn reject_with<S, P, F>(seq: &S, mut predicate: F, parameter: &P) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    P: ?Sized,
    F: FnMut(&S::Item, &P) -> bool,
{
    reject(seq, |item| predicate(item, parameter))
}

// ============================================================================
// Partition
// ============================================================================

/// Splits `seq` into matching and non-matching elements in one pass.
pub fn partition<S, F>(seq: &S, mut predicate: F) -> Partition<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item) -> bool,
{
    let mut result = Partition {
        selected: Vec::new(),
        rejected: Vec::new(),
    };
    for (_, item) in View::of(seq).iter() {
        if predicate(item) {
            result.selected.push(item.clone());
        } else {
            result.rejected.push(item.clone());
        }
    }
    result
}

/// [`partition`] with a binary predicate receiving `parameter`.
pub fn select_and_reject_with<S, P, F>(
    seq: &S,
    mut predicate: F,
    parameter: &P,
) -> Partition<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    P: ?Sized,
    F: FnMut(&S::Item, &P) -> bool,
{
    partition(seq, |item| predicate(item, parameter))
}

// ============================================================================
// Count
// ============================================================================

pub fn count<S, F>(seq: &S, mut predicate: F) -> usize
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> bool,
{
    View::of(seq)
        .iter()
        .filter(|(_, item)| predicate(item))
        .count()
}

pub fn count_with<S, P, F>(seq: &S, mut predicate: F, parameter: &P) -> usize
where
    S: Sequence + ?Sized,
    P: ?Sized,
    F: FnMut(&S::Item, &P) -> bool,
{
    count(seq, |item| predicate(item, parameter))
}

// ============================================================================
// Distinct
// ============================================================================

/// Elements in first-occurrence order with later duplicates removed.
///
/// # Examples
///
/// ```
/// use ordseq_core::iterate::distinct;
///
/// assert_eq!(distinct(&vec![3, 1, 3, 2, 1]), [3, 1, 2]);
/// ```
pub fn distinct<S>(seq: &S) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone + Eq + Hash,
{
    let mut out = Vec::new();
    distinct_into(seq, &mut out);
    out
}

/// Appends the first occurrence of every distinct element to `target`.
///
/// Only duplicates within `seq` are removed; elements already present in
/// `target` are not consulted.
pub fn distinct_into<S, C>(seq: &S, target: &mut C)
where
    S: Sequence + ?Sized,
    S::Item: Clone + Eq + Hash,
    C: Extend<S::Item>,
{
    let view = View::of(seq);
    let mut seen: HashSet<&S::Item> = HashSet::with_capacity(view.len());
    target.extend(
        view.iter()
            .filter(|(_, item)| seen.insert(*item))
            .map(|(_, item)| item.clone()),
    );
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;
