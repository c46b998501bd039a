//! Module for the PartitionEngine trait

use std::collections::BTreeSet;

use crate::config::Strategy;
use crate::partitions::Enumeration;

/// Trait for the procedures that enumerate every partition of a finite set.
///
/// All implementations return the same family for the same input; they only
/// differ in how much recursive work they do to get there, which is reported
/// in `Enumeration::calls`.
pub trait PartitionEngine
{
    /// The strategy this engine implements
    fn strategy(&self) -> Strategy;

    /// Enumerate all the partitions of `set`
    fn enumerate<T>(&self, set: &BTreeSet<T>) -> Enumeration<T>
        where T: Ord + Clone;
}
