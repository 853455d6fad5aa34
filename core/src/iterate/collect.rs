//! Mapping operations.

use alloc::vec::Vec;

use crate::capability::View;
use crate::sequence::Sequence;

/// Maps every element through `function`, in encounter order.
///
/// # Examples
///
/// ```
/// use ordseq_core::iterate::collect;
///
/// let lengths = collect(&vec!["a", "bcd", "ef"], |s| s.len());
/// assert_eq!(lengths, [1, 3, 2]);
/// ```
pub fn collect<S, V, F>(seq: &S, function: F) -> Vec<V>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> V,
{
    let view = View::of(seq);
    let mut out = Vec::with_capacity(view.len());
    collect_into(seq, function, &mut out);
    out
}

/// Appends `function(element)` for every element to `target`.
pub fn collect_into<S, V, F, C>(seq: &S, mut function: F, target: &mut C)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> V,
    C: Extend<V>,
{
    target.extend(View::of(seq).iter().map(|(_, item)| function(item)));
}

pub fn collect_with<S, P, V, F>(seq: &S, mut function: F, parameter: &P) -> Vec<V>
where
    S: Sequence + ?Sized,
    P: ?Sized,
    F: FnMut(&S::Item, &P) -> V,
{
    collect(seq, |item| function(item, parameter))
}

/// Maps only the elements that satisfy `predicate`.
pub fn collect_if<S, V, P, F>(seq: &S, mut predicate: P, mut function: F) -> Vec<V>
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
    F: FnMut(&S::Item) -> V,
{
    View::of(seq)
        .iter()
        .filter(|(_, item)| predicate(item))
        .map(|(_, item)| function(item))
        .collect()
}

// ============================================================================
// Primitive-valued mapping
// ============================================================================

macro_rules! primitive_collect {
    ($($(#[$meta:meta])* $name:ident => $prim:ty;)*) => {
        $(
            $(#[$meta])*
            pub fn $name<S, F>(seq: &S, function: F) -> Vec<$prim>
            where
                S: Sequence + ?Sized,
                F: FnMut(&S::Item) -> $prim,
            {
                collect(seq, function)
            }
        )*
    };
}

primitive_collect! {
    /// Maps every element to a `bool`.
    collect_boolean => bool;
    /// Maps every element to an `i8`.
    collect_byte => i8;
    /// Maps every element to a `char`.
    collect_char => char;
    /// Maps every element to an `f64`.
    collect_double => f64;
    /// Maps every element to an `f32`.
    collect_float => f32;
    /// Maps every element to an `i32`.
    collect_int => i32;
    /// Maps every element to an `i64`.
    collect_long => i64;
    /// Maps every element to an `i16`.
    collect_short => i16;
}

// ============================================================================
// Flattening
// ============================================================================

/// Concatenates the collections produced by `function`, in element order and
/// then in each collection's own order.
pub fn flat_collect<S, I, F>(seq: &S, function: F) -> Vec<I::Item>
where
    S: Sequence + ?Sized,
    I: IntoIterator,
    F: FnMut(&S::Item) -> I,
{
    let mut out = Vec::new();
    flat_collect_into(seq, function, &mut out);
    out
}

pub fn flat_collect_into<S, I, F, C>(seq: &S, mut function: F, target: &mut C)
where
    S: Sequence + ?Sized,
    I: IntoIterator,
    F: FnMut(&S::Item) -> I,
    C: Extend<I::Item>,
{
    target.extend(View::of(seq).iter().flat_map(|(_, item)| function(item)));
}

#[cfg(test)]
#[path = "collect_test.rs"]
mod collect_test;
