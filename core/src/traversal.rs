//! Ranged traversal engine.
//!
//! A range is a pair of inclusive endpoints `(start, end)`. When
//! `start <= end` the walk is ascending, otherwise descending. Both endpoints
//! must name a live element, i.e. lie in `[0, len - 1]`; anything else
//! (including `-1`) is rejected with [`IterateError::IndexOutOfBounds`] before
//! a single element is visited.
//!
//! ```text
//! seq   = [a, b, c, d, e]
//! (0,4) visits a b c d e
//! (4,0) visits e d c b a
//! (4,-1) -> IndexOutOfBounds { index: -1, len: 5 }
//! ```

use core::ops::ControlFlow;

use crate::capability::View;
use crate::error::IterateError;
use crate::sequence::Sequence;

/// Visits `seq[start..=end]` (ascending) or `seq[end..=start]` (descending),
/// calling `visit(element, index)` for each element.
///
/// # Examples
///
/// ```
/// use ordseq_core::traverse;
///
/// let seq = vec![1, 2, 3, 4, 5];
/// let mut seen = Vec::new();
/// traverse(&seq, 4, 0, |x, _| seen.push(*x)).unwrap();
/// assert_eq!(seen, [5, 4, 3, 2, 1]);
///
/// assert!(traverse(&seq, 4, -1, |_, _| {}).is_err());
/// ```
pub fn traverse<S, F>(seq: &S, start: isize, end: isize, mut visit: F) -> Result<(), IterateError>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, usize),
{
    let flow = try_traverse(seq, start, end, |item, index| {
        visit(item, index);
        ControlFlow::<()>::Continue(())
    })?;
    debug_assert!(flow.is_continue());
    Ok(())
}

/// Like [`traverse`], but `visit` may stop the walk early by returning
/// [`ControlFlow::Break`]; the break value is handed back to the caller.
pub fn try_traverse<S, B, F>(
    seq: &S,
    start: isize,
    end: isize,
    mut visit: F,
) -> Result<ControlFlow<B>, IterateError>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, usize) -> ControlFlow<B>,
{
    let view = View::of(seq);
    let (start, end) = check_range(start, end, view.len())?;

    if start <= end {
        for (index, item) in view.span(start, end + 1) {
            if let ControlFlow::Break(value) = visit(item, index) {
                return Ok(ControlFlow::Break(value));
            }
        }
    } else {
        for (index, item) in view.span(end, start + 1).rev() {
            if let ControlFlow::Break(value) = visit(item, index) {
                return Ok(ControlFlow::Break(value));
            }
        }
    }
    Ok(ControlFlow::Continue(()))
}

/// Validates both endpoints against `len`, start first.
fn check_range(
    start: isize,
    end: isize,
    len: usize,
) -> Result<(usize, usize), IterateError> {
    Ok((check_index(start, len)?, check_index(end, len)?))
}

fn check_index(index: isize, len: usize) -> Result<usize, IterateError> {
    usize::try_from(index)
        .ok()
        .filter(|&i| i < len)
        .ok_or(IterateError::IndexOutOfBounds { index, len })
}

#[cfg(test)]
#[path = "traversal_test.rs"]
mod traversal_test;
