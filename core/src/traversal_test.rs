//! Tests for the ranged traversal engine

use super::*;
use crate::test_utils::Opaque;
use pretty_assertions::assert_eq;

fn one_to(n: i32) -> Vec<i32> {
    (1..=n).collect()
}

fn visited<S: Sequence<Item = i32> + ?Sized>(
    seq: &S,
    start: isize,
    end: isize,
) -> Result<Vec<(i32, usize)>, IterateError> {
    let mut out = Vec::new();
    traverse(seq, start, end, |x, i| out.push((*x, i)))?;
    Ok(out)
}

// ============================================================================
// Ascending / descending
// ============================================================================

#[test]
fn test_ascending_full_range() {
    let seq = one_to(5);
    let values: Vec<i32> = visited(&seq, 0, 4).unwrap().into_iter().map(|(x, _)| x).collect();
    assert_eq!(values, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_descending_includes_both_endpoints() {
    let seq = one_to(5);
    assert_eq!(
        visited(&seq, 4, 0).unwrap(),
        vec![(5, 4), (4, 3), (3, 2), (2, 1), (1, 0)]
    );
}

#[test]
fn test_partial_ranges() {
    let seq = one_to(105);
    let up = visited(&seq, 0, 4).unwrap();
    assert_eq!(up, vec![(1, 0), (2, 1), (3, 2), (4, 3), (5, 4)]);
    let down = visited(&seq, 4, 0).unwrap();
    assert_eq!(down.iter().map(|(x, _)| *x).collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
}

#[test]
fn test_single_element_range() {
    let seq = one_to(3);
    assert_eq!(visited(&seq, 1, 1).unwrap(), vec![(2, 1)]);
}

// ============================================================================
// Bounds
// ============================================================================

#[test]
fn test_descending_to_minus_one_is_rejected() {
    let seq = one_to(5);
    assert_eq!(
        visited(&seq, 4, -1),
        Err(IterateError::IndexOutOfBounds { index: -1, len: 5 })
    );
}

#[test]
fn test_negative_start_is_rejected() {
    let seq = one_to(5);
    assert_eq!(
        visited(&seq, -1, 4),
        Err(IterateError::IndexOutOfBounds { index: -1, len: 5 })
    );
}

#[test]
fn test_end_past_len_is_rejected() {
    let seq = one_to(5);
    assert_eq!(
        visited(&seq, 0, 5),
        Err(IterateError::IndexOutOfBounds { index: 5, len: 5 })
    );
}

#[test]
fn test_any_range_on_empty_is_rejected() {
    let seq: Vec<i32> = Vec::new();
    assert_eq!(
        visited(&seq, 0, 0),
        Err(IterateError::IndexOutOfBounds { index: 0, len: 0 })
    );
}

#[test]
fn test_rejection_visits_nothing() {
    let seq = one_to(5);
    let mut calls = 0;
    let result = traverse(&seq, 2, 9, |_, _| calls += 1);
    assert_eq!(
        result,
        Err(IterateError::IndexOutOfBounds { index: 9, len: 5 })
    );
    assert_eq!(calls, 0);
}

// ============================================================================
// Early exit and opaque sequences
// ============================================================================

#[test]
fn test_try_traverse_breaks() {
    let seq = one_to(10);
    let mut seen = 0;
    let flow = try_traverse(&seq, 9, 0, |x, i| {
        seen += 1;
        if *x == 7 {
            ControlFlow::Break(i)
        } else {
            ControlFlow::Continue(())
        }
    })
    .unwrap();
    assert_eq!(flow, ControlFlow::Break(6));
    assert_eq!(seen, 4);
}

#[test]
fn test_opaque_matches_vec() {
    let seq = one_to(8);
    let opaque = Opaque::from(seq.clone());
    for (start, end) in [(0, 7), (7, 0), (2, 5), (5, 2), (3, 3)] {
        assert_eq!(visited(&seq, start, end), visited(&opaque, start, end));
    }
    assert_eq!(visited(&seq, 7, -1), visited(&opaque, 7, -1));
}
