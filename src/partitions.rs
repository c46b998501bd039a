//! Set partitions as ordered sets of blocks, and the three engines enumerating them.
//!
//! A `Partition` is a set of disjoint non-empty `Block`s covering the partitioned set.
//! Partitions are ordered by refinement: `p1` refines `p2` when every block of `p1`
//! sits inside some block of `p2`. The finest partition has only singleton blocks,
//! the coarsest has one block holding everything.
//!
//! The empty set is partitioned as `{ {} }`, one partition whose only block is empty.
//! All engines agree on this.

use std::collections::BTreeSet;
use std::iter;

use arrayvec::ArrayVec;
use tracing::{debug, debug_span, trace};

use crate::combinations::{combinations, non_empty_proper_subsets};
use crate::config::Strategy;
use crate::traits::PartitionEngine;

/// One part of a partition
pub type Block<T> = BTreeSet<T>;

/// A set of pairwise disjoint blocks
pub type Partition<T> = BTreeSet<Block<T>>;

/// A set of partitions, the result of every engine
pub type PartitionFamily<T> = BTreeSet<Partition<T>>;

/// The partitions found by an engine, plus the number of recursive calls it took
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration<T>
    where T: Ord
{
    /// Every partition of the input set
    pub family: PartitionFamily<T>,
    /// Invocations of the engine's recursive procedure, including the outermost one
    pub calls: u64,
}

impl<T: Ord> Enumeration<T>
{
    /// Number of partitions found
    pub fn len(&self) -> usize {
        self.family.len()
    }

    /// Whether no partition was found (never the case for a finite set)
    pub fn is_empty(&self) -> bool {
        self.family.is_empty()
    }

    /// Drop the call count and keep the partitions
    pub fn into_family(self) -> PartitionFamily<T> {
        self.family
    }
}

/// The partition with every element in its own singleton block
pub fn finest<T>(set: &BTreeSet<T>) -> Partition<T>
    where T: Ord + Clone
{
    set.iter().map(|elem| iter::once(elem.clone()).collect()).collect()
}

/// The partition with a single block containing the whole set
pub fn coarsest<T>(set: &BTreeSet<T>) -> Partition<T>
    where T: Ord + Clone
{
    iter::once(set.clone()).collect()
}

/// Replace blocks `a` and `b` of `partition` by their union.
///
/// Returns a new partition; `partition` itself is left untouched.
pub fn merge<T>(partition: &Partition<T>, a: &Block<T>, b: &Block<T>) -> Partition<T>
    where T: Ord + Clone
{
    let mut merged = partition.clone();
    merged.remove(a);
    merged.remove(b);
    merged.insert(a.union(b).cloned().collect());
    merged
}

/// Whether every block of `finer` is a subset of some block of `coarser`
pub fn refines<T>(finer: &Partition<T>, coarser: &Partition<T>) -> bool
    where T: Ord
{
    finer.iter().all(|block| coarser.iter().any(|other| block.is_subset(other)))
}

/// Whether `partition` is a partition of `set`: non-empty, pairwise disjoint blocks covering `set`.
///
/// For the empty set, both `{}` and `{ {} }` are accepted.
pub fn is_partition_of<T>(partition: &Partition<T>, set: &BTreeSet<T>) -> bool
    where T: Ord
{
    if set.is_empty() {
        return partition.iter().all(|block| block.is_empty());
    }
    if partition.iter().any(|block| block.is_empty()) {
        return false;
    }
    // disjoint iff the block sizes add up to the size of the union
    let total: usize = partition.iter().map(|block| block.len()).sum();
    let union: BTreeSet<&T> = partition.iter().flatten().collect();
    total == union.len() && union.len() == set.len() && set.iter().all(|elem| union.contains(elem))
}

fn empty_set_family<T>() -> PartitionFamily<T>
    where T: Ord
{
    iter::once(iter::once(Block::new()).collect()).collect()
}

fn merge_pair<T>(partition: &Partition<T>, pair: &BTreeSet<Block<T>>) -> Partition<T>
    where T: Ord + Clone
{
    let blocks: ArrayVec<&Block<T>, 2> = pair.iter().take(2).collect();
    match blocks.as_slice() {
        [a, b] => merge(partition, a, b),
        _ => partition.clone(),
    }
}

/// Peels off every non-empty proper subset as a block and partitions the remainder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PowersetEngine;

impl PowersetEngine
{
    fn recurse<T>(set: &BTreeSet<T>, calls: &mut u64) -> PartitionFamily<T>
        where T: Ord + Clone
    {
        *calls += 1;
        match set.len() {
            0 => return empty_set_family(),
            1 => return iter::once(coarsest(set)).collect(),
            _ => {}
        }

        let mut family = PartitionFamily::new();
        for subset in non_empty_proper_subsets(set) {
            let rest: BTreeSet<T> = set.difference(&subset).cloned().collect();
            for mut partition in Self::recurse(&rest, calls) {
                partition.insert(subset.clone());
                family.insert(partition);
            }
        }
        family.insert(coarsest(set));
        family
    }
}

impl PartitionEngine for PowersetEngine
{
    fn strategy(&self) -> Strategy {
        Strategy::Powerset
    }

    fn enumerate<T>(&self, set: &BTreeSet<T>) -> Enumeration<T>
        where T: Ord + Clone
    {
        let _span = debug_span!("partitions", strategy = %self.strategy(), elements = set.len()).entered();
        let mut calls = 0;
        let family = Self::recurse(set, &mut calls);
        debug!(partitions = family.len(), calls, "enumerated set partitions");
        Enumeration {family, calls}
    }
}

/// Walks the refinement lattice upwards from the finest partition, merging two blocks per step.
///
/// Every merge sequence is followed, so partitions reachable along several paths
/// are expanded once per path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefinementEngine;

impl RefinementEngine
{
    fn recurse<T>(current: &Partition<T>, mut family: PartitionFamily<T>, calls: &mut u64) -> PartitionFamily<T>
        where T: Ord + Clone
    {
        *calls += 1;
        // a single block has no pairs, which ends the recursion at the coarsest partition
        for pair in combinations(current, 2) {
            let merged = merge_pair(current, &pair);
            family.insert(merged.clone());
            family = Self::recurse(&merged, family, calls);
        }
        family
    }
}

impl PartitionEngine for RefinementEngine
{
    fn strategy(&self) -> Strategy {
        Strategy::Refinement
    }

    fn enumerate<T>(&self, set: &BTreeSet<T>) -> Enumeration<T>
        where T: Ord + Clone
    {
        let _span = debug_span!("partitions", strategy = %self.strategy(), elements = set.len()).entered();
        let mut calls = 0;
        let family = if set.is_empty() {
            calls += 1;
            empty_set_family()
        } else {
            let start = finest(set);
            let family = iter::once(start.clone()).collect();
            Self::recurse(&start, family, &mut calls)
        };
        debug!(partitions = family.len(), calls, "enumerated set partitions");
        Enumeration {family, calls}
    }
}

/// Same walk as `RefinementEngine`, but a partition already visited is neither added
/// nor expanded again.
///
/// The visited set is the result family itself, so each partition is expanded exactly
/// once and the number of calls equals the number of partitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoizedRefinementEngine;

impl MemoizedRefinementEngine
{
    fn recurse<T>(current: &Partition<T>, visited: &mut PartitionFamily<T>, calls: &mut u64)
        where T: Ord + Clone
    {
        *calls += 1;
        for pair in combinations(current, 2) {
            let merged = merge_pair(current, &pair);
            if visited.contains(&merged) {
                trace!(blocks = merged.len(), "partition already expanded");
                continue;
            }
            visited.insert(merged.clone());
            Self::recurse(&merged, visited, calls);
        }
    }
}

impl PartitionEngine for MemoizedRefinementEngine
{
    fn strategy(&self) -> Strategy {
        Strategy::MemoizedRefinement
    }

    fn enumerate<T>(&self, set: &BTreeSet<T>) -> Enumeration<T>
        where T: Ord + Clone
    {
        let _span = debug_span!("partitions", strategy = %self.strategy(), elements = set.len()).entered();
        let mut calls = 0;
        let family = if set.is_empty() {
            calls += 1;
            empty_set_family()
        } else {
            let start = finest(set);
            let mut visited = iter::once(start.clone()).collect();
            Self::recurse(&start, &mut visited, &mut calls);
            visited
        };
        debug!(partitions = family.len(), calls, "enumerated set partitions");
        Enumeration {family, calls}
    }
}

/// All partitions of `set`, computed from its powerset
pub fn partitions_by_powerset<T>(set: &BTreeSet<T>) -> PartitionFamily<T>
    where T: Ord + Clone
{
    PowersetEngine.enumerate(set).family
}

/// All partitions of `set`, found by walking the refinement lattice without memoization
pub fn partitions_by_refinement<T>(set: &BTreeSet<T>) -> PartitionFamily<T>
    where T: Ord + Clone
{
    RefinementEngine.enumerate(set).family
}

/// All partitions of `set`, found by walking the refinement lattice with memoization
pub fn partitions_by_memoized_refinement<T>(set: &BTreeSet<T>) -> PartitionFamily<T>
    where T: Ord + Clone
{
    MemoizedRefinementEngine.enumerate(set).family
}

/// All partitions of `set`, using the default (memoized refinement) strategy
pub fn partitions<T>(set: &BTreeSet<T>) -> PartitionFamily<T>
    where T: Ord + Clone
{
    Strategy::default().enumerate(set).family
}
