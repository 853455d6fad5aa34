//! Left folds.

use crate::capability::View;
use crate::sequence::Sequence;

/// Folds `seq` from the left, starting at `initial`.
///
/// # Examples
///
/// ```
/// use ordseq_core::iterate::inject_into;
///
/// let joined = inject_into(&vec!["a", "b", "c"], String::new(), |mut acc, s| {
///     acc.push_str(s);
///     acc
/// });
/// assert_eq!(joined, "abc");
/// ```
pub fn inject_into<S, A, F>(seq: &S, initial: A, mut function: F) -> A
where
    S: Sequence + ?Sized,
    F: FnMut(A, &S::Item) -> A,
{
    View::of(seq)
        .iter()
        .fold(initial, |acc, (_, item)| function(acc, item))
}

/// [`inject_into`] with a fixed extra `parameter` passed to every step.
pub fn inject_into_with<S, A, P, F>(seq: &S, initial: A, mut function: F, parameter: &P) -> A
where
    S: Sequence + ?Sized,
    P: ?Sized,
    F: FnMut(A, &S::Item, &P) -> A,
{
    inject_into(seq, initial, |acc, item| function(acc, item, parameter))
}

// Fixed-type accumulators.

pub fn inject_into_int<S, F>(seq: &S, initial: i32, function: F) -> i32
where
    S: Sequence + ?Sized,
    F: FnMut(i32, &S::Item) -> i32,
{
    inject_into(seq, initial, function)
}

pub fn inject_into_long<S, F>(seq: &S, initial: i64, function: F) -> i64
where
    S: Sequence + ?Sized,
    F: FnMut(i64, &S::Item) -> i64,
{
    inject_into(seq, initial, function)
}

pub fn inject_into_double<S, F>(seq: &S, initial: f64, function: F) -> f64
where
    S: Sequence + ?Sized,
    F: FnMut(f64, &S::Item) -> f64,
{
    inject_into(seq, initial, function)
}
