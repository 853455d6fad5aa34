//! End-to-end scenarios through the public facade.

use std::collections::VecDeque;

use ordseq::iterate::{
    all_satisfy, any_satisfy, distinct, drop, flat_collect, inject_into, none_satisfy,
    remove_if, sort_this, take,
};
use ordseq::stack::{ImmutableIntStack, StackError};
use ordseq::{IterateError, traverse};
use pretty_assertions::assert_eq;

fn ranged(seq: &[i32], start: isize, end: isize) -> Result<Vec<i32>, IterateError> {
    let seq = seq.to_vec();
    let mut out = Vec::new();
    traverse(&seq, start, end, |x, _| out.push(*x))?;
    Ok(out)
}

#[test]
fn test_sort_natural_order() {
    let mut seq = vec![2, 3, 4, 1, 5, 7, 6, 9, 8];
    sort_this(&mut seq);
    assert_eq!(seq, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn test_descending_traversal() {
    assert_eq!(ranged(&[1, 2, 3, 4, 5], 4, 0), Ok(vec![5, 4, 3, 2, 1]));
}

#[test]
fn test_descending_traversal_past_zero() {
    assert_eq!(
        ranged(&[1, 2, 3, 4, 5], 4, -1),
        Err(IterateError::IndexOutOfBounds { index: -1, len: 5 })
    );
}

#[test]
fn test_take_then_drop() {
    let seq = vec![5, 4, 3, 2, 1];
    let head = take(&seq, 2).unwrap();
    let tail = drop(&seq, 2).unwrap();
    assert_eq!(head, vec![5, 4]);
    assert_eq!(tail, vec![3, 2, 1]);
    assert_eq!([head, tail].concat(), seq);
}

#[test]
fn test_stack_pop_order_and_round_trip() {
    let stack = ImmutableIntStack::new_stack_with(&[1, 2, 3]);
    let decoded = ImmutableIntStack::from_bytes(&stack.to_bytes().unwrap()).unwrap();

    for s in [stack, decoded] {
        let s = s.pop().unwrap();
        assert_eq!(s.peek(), Ok(2));
        let s = s.pop_n(2).unwrap();
        assert_eq!(s.pop(), Err(StackError::Empty));
    }
}

#[test]
fn test_remove_absent_values() {
    let mut seq = VecDeque::from([Some(1), None, Some(2), Some(3)]);
    remove_if(&mut seq, Option::is_none);
    assert_eq!(seq, [Some(1), Some(2), Some(3)]);
}

#[test]
fn test_quantifiers_and_folds_compose() {
    let words = VecDeque::from(["to", "be", "or", "not", "to", "be"]);
    assert_eq!(distinct(&words), vec!["to", "be", "or", "not"]);
    assert!(all_satisfy(&words, |w| w.len() <= 3));
    assert!(any_satisfy(&words, |w| w.len() == 3));
    assert!(none_satisfy(&words, |w| w.is_empty()));
    assert_eq!(inject_into(&words, 0, |n, w| n + w.len()), 13);
    assert_eq!(flat_collect(&words, |w| w.chars().take(1).collect::<Vec<_>>()).len(), 6);
}
