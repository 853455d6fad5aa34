//! Grouping into multimaps.

use core::hash::Hash;

use crate::capability::View;
use crate::multimap::{ListMultimap, MultimapBuilder};
use crate::sequence::Sequence;

/// Groups elements by the key `function` computes for each of them.
///
/// Values under each key keep encounter order.
///
/// # Examples
///
/// ```
/// use ordseq_core::iterate::group_by;
///
/// let groups = group_by(&vec![1, 2, 3, 4, 5], |x| x % 2 == 0);
/// assert_eq!(groups.get(&true), [2, 4]);
/// assert_eq!(groups.get(&false), [1, 3, 5]);
/// ```
pub fn group_by<S, K, F>(seq: &S, function: F) -> ListMultimap<K, S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    K: Hash + Eq,
    F: FnMut(&S::Item) -> K,
{
    let mut target = ListMultimap::new();
    group_by_into(seq, function, &mut target);
    target
}

/// Inserts every element into `target` under the key `function` computes.
pub fn group_by_into<S, K, F, M>(seq: &S, mut function: F, target: &mut M)
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item) -> K,
    M: MultimapBuilder<K, S::Item>,
{
    for (_, item) in View::of(seq).iter() {
        target.insert(function(item), item.clone());
    }
}

/// Like [`group_by`], but `function` yields any number of keys per element;
/// the element is inserted once under each of them.
pub fn group_by_each<S, K, I, F>(seq: &S, function: F) -> ListMultimap<K, S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    K: Hash + Eq,
    I: IntoIterator<Item = K>,
    F: FnMut(&S::Item) -> I,
{
    let mut target = ListMultimap::new();
    group_by_each_into(seq, function, &mut target);
    target
}

pub fn group_by_each_into<S, K, I, F, M>(seq: &S, mut function: F, target: &mut M)
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    I: IntoIterator<Item = K>,
    F: FnMut(&S::Item) -> I,
    M: MultimapBuilder<K, S::Item>,
{
    for (_, item) in View::of(seq).iter() {
        for key in function(item) {
            target.insert(key, item.clone());
        }
    }
}
