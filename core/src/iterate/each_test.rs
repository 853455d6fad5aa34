//! Tests for the side-effecting traversals

use super::*;
use crate::test_utils::Opaque;
use pretty_assertions::assert_eq;

fn one_to(n: i32) -> Vec<i32> {
    (1..=n).collect()
}

#[test]
fn test_for_each_in_order() {
    let list = one_to(5);
    let mut result = Vec::new();
    for_each(&list, |x| result.push(*x));
    assert_eq!(result, list);
}

#[test]
fn test_for_each_over_opaque() {
    let list = Opaque::from(one_to(101));
    let mut result = Vec::with_capacity(101);
    for_each(&list, |x| result.push(*x));
    assert_eq!(result, one_to(101));
}

#[test]
fn test_for_each_with_passes_parameter() {
    let list = one_to(3);
    let mut result = Vec::new();
    for_each_with(&list, |x, offset| result.push(*x + *offset), &10);
    assert_eq!(result, vec![11, 12, 13]);
}

#[test]
fn test_for_each_with_index_matches_values() {
    let list = one_to(101);
    for_each_with_index(&list, |x, i| assert_eq!(*x as usize, i + 1));
}

#[test]
fn test_reverse_for_each() {
    let list = one_to(5);
    let mut result = Vec::new();
    reverse_for_each(&list, |x| result.push(*x));
    assert_eq!(result, vec![5, 4, 3, 2, 1]);
}

#[test]
fn test_reverse_for_each_empty() {
    let list: Vec<i32> = Vec::new();
    let mut result = Vec::new();
    reverse_for_each(&list, |x| result.push(*x));
    assert!(result.is_empty());

    reverse_for_each(&Opaque::from(list), |x| result.push(*x));
    assert!(result.is_empty());
}

#[test]
fn test_for_each_in_range_both_directions() {
    let list = one_to(5);
    let mut up = Vec::new();
    for_each_in_range(&list, 0, 4, |x| up.push(*x)).unwrap();
    assert_eq!(up, list);

    let mut down = Vec::new();
    for_each_in_range(&list, 4, 0, |x| down.push(*x)).unwrap();
    assert_eq!(down, vec![5, 4, 3, 2, 1]);

    assert_eq!(
        for_each_in_range(&list, 4, -1, |_| {}),
        Err(IterateError::IndexOutOfBounds { index: -1, len: 5 })
    );
    assert_eq!(
        for_each_in_range(&list, -1, 4, |_| {}),
        Err(IterateError::IndexOutOfBounds { index: -1, len: 5 })
    );
}

#[test]
fn test_for_each_with_index_in_range() {
    let list = one_to(105);
    let mut result = Vec::new();
    for_each_with_index_in_range(&list, 0, 104, |x, _| result.push(*x)).unwrap();
    assert_eq!(result, list);

    let mut reversed = Vec::new();
    for_each_with_index_in_range(&list, 104, 0, |x, i| reversed.push((*x, i))).unwrap();
    assert_eq!(reversed.first(), Some(&(105, 104)));
    assert_eq!(reversed.last(), Some(&(1, 0)));

    assert!(for_each_with_index_in_range(&list, 104, -1, |_, _| {}).is_err());
    assert!(for_each_with_index_in_range(&list, -1, 104, |_, _| {}).is_err());
}

#[test]
fn test_for_each_in_both_pairs() {
    let left = vec!["1", "2"];
    let right = Opaque::from(vec!["a", "b"]);
    let mut pairs = Vec::new();
    for_each_in_both(&left, &right, |a, b| pairs.push((*a, *b))).unwrap();
    assert_eq!(pairs, vec![("1", "a"), ("2", "b")]);
}

#[test]
fn test_for_each_in_both_rejects_different_lengths() {
    let left = vec![1, 2, 3];
    let right = vec![1, 2];
    let mut calls = 0;
    assert_eq!(
        for_each_in_both(&left, &right, |_, _| calls += 1),
        Err(IterateError::SizeMismatch { left: 3, right: 2 })
    );
    assert_eq!(calls, 0);
}
