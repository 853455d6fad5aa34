//! Prefix/suffix extraction and copying.

use alloc::vec::Vec;

use crate::capability::View;
use crate::error::IterateError;
use crate::sequence::Sequence;

fn check_count(count: isize) -> Result<usize, IterateError> {
    usize::try_from(count).map_err(|_| IterateError::NegativeCount(count))
}

/// The first `min(count, len)` elements.
///
/// # Examples
///
/// ```
/// use ordseq_core::iterate::{drop, take};
///
/// let seq = vec![5, 4, 3, 2, 1];
/// assert_eq!(take(&seq, 2).unwrap(), [5, 4]);
/// assert_eq!(drop(&seq, 2).unwrap(), [3, 2, 1]);
/// assert!(take(&seq, -1).is_err());
/// ```
///
/// # Errors
///
/// [`IterateError::NegativeCount`] if `count < 0`.
pub fn take<S>(seq: &S, count: isize) -> Result<Vec<S::Item>, IterateError>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    let count = check_count(count)?;
    let view = View::of(seq);
    let end = count.min(view.len());
    Ok(view.span(0, end).map(|(_, item)| item.clone()).collect())
}

/// Everything after the first `min(count, len)` elements.
///
/// # Errors
///
/// [`IterateError::NegativeCount`] if `count < 0`.
pub fn drop<S>(seq: &S, count: isize) -> Result<Vec<S::Item>, IterateError>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    let count = check_count(count)?;
    let view = View::of(seq);
    let len = view.len();
    let start = count.min(len);
    Ok(view.span(start, len).map(|(_, item)| item.clone()).collect())
}

/// Owned copy of the whole sequence.
pub fn to_vec<S>(seq: &S) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    View::of(seq).to_vec()
}

/// Copies the first `count` elements of `seq` into
/// `target[target_index..target_index + count]`.
///
/// Nothing is written unless both sides are large enough.
pub fn copy_into<S>(
    seq: &S,
    target: &mut [S::Item],
    target_index: usize,
    count: usize,
) -> Result<(), IterateError>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    let view = View::of(seq);
    if count > view.len() {
        return Err(IterateError::CountExceedsLength {
            count,
            len: view.len(),
        });
    }
    let available = target.len();
    let required = target_index.saturating_add(count);
    let Some(window) = target.get_mut(target_index..required) else {
        return Err(IterateError::TargetTooSmall {
            required,
            available,
        });
    };

    match view {
        View::Fast(data) => window.clone_from_slice(&data[..count]),
        View::Safe(_) => {
            for (slot, (_, item)) in window.iter_mut().zip(view.span(0, count)) {
                slot.clone_from(item);
            }
        }
    }
    Ok(())
}
