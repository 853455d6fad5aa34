//! In-place operations: conditional removal and sorting.
//!
//! These take `&mut S` and probe for the canonical growable array through
//! [`SequenceMut::contiguous_mut`]. When it is absent they fall back to the
//! generic accessors and must leave the sequence in exactly the state the
//! fast path would have.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::capability::View;
use crate::sequence::SequenceMut;

// ============================================================================
// Removal
// ============================================================================

/// Removes every element satisfying `predicate`, keeping survivors in their
/// original relative order. Returns the number of elements removed.
///
/// # Examples
///
/// ```
/// use ordseq_core::iterate::remove_if;
///
/// let mut seq = vec![Some(1), None, Some(2), Some(3)];
/// assert_eq!(remove_if(&mut seq, |x| x.is_none()), 1);
/// assert_eq!(seq, [Some(1), Some(2), Some(3)]);
/// ```
pub fn remove_if<S, F>(seq: &mut S, mut predicate: F) -> usize
where
    S: SequenceMut + ?Sized,
    F: FnMut(&S::Item) -> bool,
{
    if let Some(vec) = seq.contiguous_mut() {
        let before = vec.len();
        vec.retain(|item| !predicate(item));
        return before - vec.len();
    }

    // Compact survivors into a prefix, then cut the tail.
    let len = seq.len();
    tracing::debug!(len, "removing through generic accessors");
    let mut kept = 0;
    let mut scanned = 0;
    while scanned < len {
        let Some(item) = seq.get(scanned) else {
            break;
        };
        if !predicate(item) {
            if kept != scanned {
                seq.swap(kept, scanned);
            }
            kept += 1;
        }
        scanned += 1;
    }
    seq.truncate(kept);
    scanned - kept
}

/// [`remove_if`] with a binary predicate receiving `parameter`.
pub fn remove_if_with<S, P, F>(seq: &mut S, mut predicate: F, parameter: &P) -> usize
where
    S: SequenceMut + ?Sized,
    P: ?Sized,
    F: FnMut(&S::Item, &P) -> bool,
{
    remove_if(seq, |item| predicate(item, parameter))
}

// ============================================================================
// Sorting
// ============================================================================

/// Sorts in place by natural order. The sort is stable.
pub fn sort_this<S>(seq: &mut S)
where
    S: SequenceMut + ?Sized,
    S::Item: Ord,
{
    sort_this_by(seq, Ord::cmp);
}

/// Sorts in place with `compare`. The sort is stable.
///
/// Opaque sequences are sorted by ordering their indices, then moving each
/// element into place with [`SequenceMut::swap`]. Elements are never cloned.
pub fn sort_this_by<S, F>(seq: &mut S, mut compare: F)
where
    S: SequenceMut + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    if let Some(vec) = seq.contiguous_mut() {
        vec.sort_by(compare);
        return;
    }

    // order[i] is the current index of the element that belongs at i.
    let order = {
        let items: Vec<&S::Item> = View::of(&*seq).iter().map(|(_, item)| item).collect();
        tracing::debug!(len = items.len(), "sorting through generic accessors");
        let mut order: Vec<usize> = (0..items.len()).collect();
        order.sort_by(|&a, &b| compare(items[a], items[b]));
        order
    };
    apply_permutation(seq, &order);
}

/// Sorts in place by the key `function` extracts. The sort is stable.
pub fn sort_this_by_key<S, K, F>(seq: &mut S, mut function: F)
where
    S: SequenceMut + ?Sized,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    sort_this_by(seq, |a, b| function(a).cmp(&function(b)));
}

/// Rearranges `seq` so the element at `order[i]` ends up at `i`, one cycle
/// at a time.
fn apply_permutation<S: SequenceMut + ?Sized>(seq: &mut S, order: &[usize]) {
    let mut placed = alloc::vec![false; order.len()];
    for start in 0..order.len() {
        if placed[start] {
            continue;
        }
        let mut current = start;
        loop {
            placed[current] = true;
            let next = order[current];
            if next == start {
                break;
            }
            seq.swap(current, next);
            current = next;
        }
    }
}

#[cfg(test)]
#[path = "mutate_test.rs"]
mod mutate_test;
