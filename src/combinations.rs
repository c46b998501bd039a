//! k-combinations and powersets of ordered sets.
//!
//! Everything here is generic over the element type, so the same functions
//! pick subsets of elements and pairs of blocks out of a partition.

use std::collections::BTreeSet;
use std::fmt::Display;

use num_traits::PrimInt;

use crate::error::{Error, Result};

/// All subsets of `set` with exactly `k` elements.
///
/// `k == 0` yields the single empty subset, and `k > set.len()` yields nothing.
pub fn combinations<T>(set: &BTreeSet<T>, k: usize) -> BTreeSet<BTreeSet<T>>
    where T: Ord + Clone
{
    if k == 0 {
        return std::iter::once(BTreeSet::new()).collect();
    }
    if k == 1 {
        return set.iter().map(|elem| std::iter::once(elem.clone()).collect()).collect();
    }
    if set.len() < k {
        return BTreeSet::new();
    }

    // the pivot is the first element; subsets either contain it or they don't
    let mut rest = set.clone();
    let pivot = match rest.pop_first() {
        Some(pivot) => pivot,
        None => return BTreeSet::new(),
    };

    let mut result: BTreeSet<BTreeSet<T>> = combinations(&rest, k - 1)
        .into_iter()
        .map(|mut combo| {
            combo.insert(pivot.clone());
            combo
        })
        .collect();
    result.extend(combinations(&rest, k));
    result
}

/// Checked variant of `combinations` taking any primitive integer as `k`.
///
/// Returns `Error::InvalidArgument` if `k` is negative or does not fit into `usize`,
/// instead of silently producing an empty family.
pub fn try_combinations<T, K>(set: &BTreeSet<T>, k: K) -> Result<BTreeSet<BTreeSet<T>>>
    where T: Ord + Clone, K: PrimInt + Display
{
    match k.to_usize() {
        Some(k) => Ok(combinations(set, k)),
        None => Err(Error::InvalidArgument(format!("k must be a non-negative size, got {}", k))),
    }
}

/// All subsets of `set`, of every size from 0 to `set.len()`
pub fn powerset<T>(set: &BTreeSet<T>) -> BTreeSet<BTreeSet<T>>
    where T: Ord + Clone
{
    let mut result = BTreeSet::new();
    for k in 0..=set.len() {
        result.extend(combinations(set, k));
    }
    result
}

/// The powerset without its top (`set` itself) and bottom (the empty set)
pub fn non_empty_proper_subsets<T>(set: &BTreeSet<T>) -> BTreeSet<BTreeSet<T>>
    where T: Ord + Clone
{
    let mut result = powerset(set);
    result.remove(set);
    result.remove(&BTreeSet::new());
    result
}
