//! Higher-order operations over any [`Sequence`](crate::Sequence).
//!
//! Every function here classifies its input once and walks it in index order
//! (or reverse index order where the name says so). Read-only operations take
//! `&S`; `remove_if` and the `sort_this` family take `&mut S`.
//!
//! Functions ending in `_with` pass an extra `parameter` to the callback on
//! every call. Functions ending in `_into` append to a caller-supplied
//! container instead of allocating a new one.

mod collect;
mod detect;
mod each;
mod filter;
mod fold;
mod group;
mod mutate;
mod slice;

pub use collect::{
    collect, collect_boolean, collect_byte, collect_char, collect_double, collect_float,
    collect_if, collect_int, collect_into, collect_long, collect_short, collect_with,
    flat_collect, flat_collect_into,
};
pub use detect::{
    all_satisfy, all_satisfy_with, any_satisfy, any_satisfy_with, detect, detect_if_none,
    detect_index, detect_index_with, detect_with, detect_with_if_none, none_satisfy,
    none_satisfy_with,
};
pub use each::{
    for_each, for_each_in_both, for_each_in_range, for_each_with, for_each_with_index,
    for_each_with_index_in_range, reverse_for_each,
};
pub use filter::{
    Partition, count, count_with, distinct, distinct_into, partition, reject, reject_into,
    reject_with, select, select_and_reject_with, select_into, select_with,
};
pub use fold::{inject_into, inject_into_double, inject_into_int, inject_into_long, inject_into_with};
pub use group::{group_by, group_by_each, group_by_each_into, group_by_into};
pub use mutate::{remove_if, remove_if_with, sort_this, sort_this_by, sort_this_by_key};
pub use slice::{copy_into, drop, take, to_vec};
