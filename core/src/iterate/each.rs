//! Side-effecting traversals.

use crate::capability::View;
use crate::error::IterateError;
use crate::sequence::Sequence;
use crate::traversal::traverse;

// ============================================================================
// Whole-sequence
// ============================================================================

/// Calls `procedure` on every element in index order.
pub fn for_each<S, F>(seq: &S, mut procedure: F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item),
{
    for (_, item) in View::of(seq).iter() {
        procedure(item);
    }
}

/// Calls `procedure(element, parameter)` on every element in index order.
pub fn for_each_with<S, P, F>(seq: &S, mut procedure: F, parameter: &P)
where
    S: Sequence + ?Sized,
    P: ?Sized,
    F: FnMut(&S::Item, &P),
{
    for (_, item) in View::of(seq).iter() {
        procedure(item, parameter);
    }
}

/// Calls `procedure(element, index)` on every element in index order.
pub fn for_each_with_index<S, F>(seq: &S, mut procedure: F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, usize),
{
    for (index, item) in View::of(seq).iter() {
        procedure(item, index);
    }
}

/// Calls `procedure` on every element from the last index down to `0`.
///
/// An empty sequence is a no-op, not a bounds error.
pub fn reverse_for_each<S, F>(seq: &S, mut procedure: F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item),
{
    for (_, item) in View::of(seq).iter().rev() {
        procedure(item);
    }
}

// ============================================================================
// Ranged
// ============================================================================

/// Calls `procedure` on `seq[start..=end]`, descending when `start > end`.
///
/// See [`traverse`] for the bounds policy.
pub fn for_each_in_range<S, F>(
    seq: &S,
    start: isize,
    end: isize,
    mut procedure: F,
) -> Result<(), IterateError>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item),
{
    traverse(seq, start, end, |item, _| procedure(item))
}

/// Indexed form of [`for_each_in_range`].
pub fn for_each_with_index_in_range<S, F>(
    seq: &S,
    start: isize,
    end: isize,
    procedure: F,
) -> Result<(), IterateError>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, usize),
{
    traverse(seq, start, end, procedure)
}

// ============================================================================
// Paired
// ============================================================================

/// Calls `procedure(left[i], right[i])` for every index, in order.
///
/// Both sequences must have the same length; otherwise nothing is visited and
/// [`IterateError::SizeMismatch`] is returned.
pub fn for_each_in_both<A, B, F>(left: &A, right: &B, mut procedure: F) -> Result<(), IterateError>
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    F: FnMut(&A::Item, &B::Item),
{
    let left = View::of(left);
    let right = View::of(right);
    if left.len() != right.len() {
        return Err(IterateError::SizeMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    for ((_, a), (_, b)) in left.iter().zip(right.iter()) {
        procedure(a, b);
    }
    Ok(())
}

#[cfg(test)]
#[path = "each_test.rs"]
mod each_test;
