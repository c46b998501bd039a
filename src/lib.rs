#![deny(missing_docs)]

//! The **set-partition-lattice** crate enumerates all the possible partitions of a
//! finite set into disjoint, non-empty blocks, along with the k-combinations and
//! powersets the enumeration is built on.
//!
//! Sets are represented as `BTreeSet`s, so elements only need `Ord + Clone`. A
//! `Partition` is a `BTreeSet` of `Block`s and the result of an enumeration is a
//! `PartitionFamily`, a `BTreeSet` of partitions; equality between results is exact
//! set equality.
//!
//! Three engines compute the same family:
//!
//! - `PowersetEngine` peels off every non-empty proper subset as a block and
//!   recursively partitions the rest. It is the slow, obviously correct oracle.
//! - `RefinementEngine` starts from the finest partition and merges two blocks at a
//!   time, following every path through the refinement lattice. Partitions reachable
//!   by several merge orders are expanded once per path.
//! - `MemoizedRefinementEngine` does the same walk but never expands a partition twice.
//!   This is the default.
//!
//! For a 7-element set they make 47293, 135787 and 877 recursive calls respectively;
//! each `Enumeration` reports its own count.
//!
//! The number of partitions of a set with `n` elements is the `n`-th Bell number,
//! available from `set_partitions`.
//!
//! # How to use
//!
//! Call `partitions` for the default engine, `partitions_by_powerset`,
//! `partitions_by_refinement` or `partitions_by_memoized_refinement` for a specific one,
//! or build a `Config` to pick a `Strategy` at runtime and bound the input size.
//! Use `render` to print blocks, partitions and families in brace notation:
//!
//! ```
//! use std::collections::BTreeSet;
//! use set_partition_lattice::{partitions, render};
//!
//! let set: BTreeSet<u32> = [1, 2].into_iter().collect();
//! assert_eq!(render(&partitions(&set)), "{{{1}, {2}}, {{1, 2}}}");
//! ```
//!
//! Engines log a `debug` event per enumeration through `tracing`; install a subscriber
//! to see them.

pub mod combinations;
pub mod config;
pub mod error;
pub mod partitions;
pub mod render;
pub mod traits;

pub use crate::combinations::{combinations, non_empty_proper_subsets, powerset, try_combinations};
pub use crate::config::{Config, Strategy};
pub use crate::error::{Error, Result};
pub use crate::partitions::{
    coarsest, finest, is_partition_of, merge, partitions, partitions_by_memoized_refinement,
    partitions_by_powerset, partitions_by_refinement, refines, Block, Enumeration,
    MemoizedRefinementEngine, Partition, PartitionFamily, PowersetEngine, RefinementEngine,
};
pub use crate::render::{render, Render};
pub use crate::traits::PartitionEngine;

// bigger ones don't fit into u64
static BELL_NUMBERS: [u64; 26] = [
    1,
    1,
    2,
    5,
    15,
    52,
    203,
    877,
    4140,
    21147,
    115975,
    678570,
    4213597,
    27644437,
    190899322,
    1382958545,
    10480142147,
    82864869804,
    682076806159,
    5832742205057,
    51724158235372,
    474869816156751,
    4506715738447323,
    44152005855084346,
    445958869294805289,
    4638590332229999353
];

/// Number of partitions of a set of `n` elements.
///
/// Simply returns the `n`-th Bell number, or `None` if it's too large to fit into `u64`.
pub fn set_partitions(n: usize) -> Option<u64>
{
    BELL_NUMBERS.get(n).copied()
}

#[cfg(test)]
mod tests {
    // B(n + 1) = sum over k of C(n, k) B(k)
    #[test]
    fn set_partitions()
    {
        let mut bell_numbers = vec![1u64];
        let mut n = 0;
        assert_eq!(crate::set_partitions(0), Some(1));
        loop {
            if let Some(sp) = crate::set_partitions(n + 1) {
                let mut b = 0u64;
                for k in 0..(n+1) {
                    let mut c = 1u64;
                    for i in 1..k+1 {
                        c *= (n - k + i) as u64;
                        c /= i as u64;
                    }
                    b += bell_numbers[k] * c;
                }
                assert_eq!(b, sp);
                bell_numbers.push(b);
            } else {
                break;
            }
            n += 1;
        }
        assert_eq!(n, 25);
        assert_eq!(crate::set_partitions(26), None);
    }

    #[test]
    fn enumeration_matches_bell_numbers()
    {
        use std::collections::BTreeSet;
        for n in 0..8usize {
            let set: BTreeSet<usize> = (0..n).collect();
            assert_eq!(Some(crate::partitions(&set).len() as u64), crate::set_partitions(n));
        }
    }
}
