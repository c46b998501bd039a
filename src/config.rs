//! Choosing an engine and bounding the input size.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::{Error, Result};
use crate::partitions::{Enumeration, MemoizedRefinementEngine, PowersetEngine, RefinementEngine};
use crate::traits::PartitionEngine;

/// The available partition enumeration strategies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strategy
{
    /// Recursion over the non-empty proper subsets; the reference oracle
    Powerset,
    /// Unmemoized walk of the refinement lattice
    Refinement,
    /// Memoized walk of the refinement lattice
    #[default]
    MemoizedRefinement,
}

impl Strategy
{
    /// Every strategy, slowest oracle first
    pub const ALL: [Strategy; 3] = [Strategy::Powerset, Strategy::Refinement, Strategy::MemoizedRefinement];

    /// The canonical name, as accepted by `from_str`
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Powerset => "powerset",
            Strategy::Refinement => "refinement",
            Strategy::MemoizedRefinement => "memoized",
        }
    }

    /// Run the engine implementing this strategy
    pub fn enumerate<T>(self, set: &BTreeSet<T>) -> Enumeration<T>
        where T: Ord + Clone
    {
        match self {
            Strategy::Powerset => PowersetEngine.enumerate(set),
            Strategy::Refinement => RefinementEngine.enumerate(set),
            Strategy::MemoizedRefinement => MemoizedRefinementEngine.enumerate(set),
        }
    }
}

impl fmt::Display for Strategy
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "powerset" => Ok(Strategy::Powerset),
            "refinement" => Ok(Strategy::Refinement),
            "memoized" | "memoized-refinement" | "memo" => Ok(Strategy::MemoizedRefinement),
            _ => Err(Error::UnknownStrategy(s.to_owned())),
        }
    }
}

/// Which engine to run, and how large an input it may be given.
///
/// The number of partitions grows with the Bell numbers, so `max_elements` guards
/// callers that pass through untrusted input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config
{
    /// Engine to run
    pub strategy: Strategy,
    /// Reject inputs with more elements than this, if set
    pub max_elements: Option<usize>,
}

impl Config
{
    /// Default strategy, no size limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `strategy` instead of the current one
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Reject inputs larger than `max`
    pub fn with_max_elements(mut self, max: usize) -> Self {
        self.max_elements = Some(max);
        self
    }

    /// Enumerate the partitions of `set` with the configured engine
    pub fn partitions<T>(&self, set: &BTreeSet<T>) -> Result<Enumeration<T>>
        where T: Ord + Clone
    {
        if let Some(max) = self.max_elements {
            if set.len() > max {
                warn!(elements = set.len(), max, "refusing to enumerate partitions of an oversized set");
                return Err(Error::TooManyElements {len: set.len(), max});
            }
        }
        Ok(self.strategy.enumerate(set))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.name().parse::<Strategy>(), Ok(strategy));
            assert_eq!(strategy.to_string(), strategy.name());
        }
        assert_eq!(" Memo ".parse::<Strategy>(), Ok(Strategy::MemoizedRefinement));
        assert_eq!("memoized-refinement".parse::<Strategy>(), Ok(Strategy::MemoizedRefinement));
        assert_eq!("bogus".parse::<Strategy>(), Err(Error::UnknownStrategy("bogus".to_owned())));
    }

    #[test]
    fn default_is_memoized() {
        assert_eq!(Strategy::default(), Strategy::MemoizedRefinement);
        assert_eq!(Config::new().strategy, Strategy::MemoizedRefinement);
        assert_eq!(Config::new().max_elements, None);
    }

    #[test]
    fn size_guard() {
        let set: BTreeSet<u8> = (0..5).collect();
        let config = Config::new().with_max_elements(4);
        assert_eq!(config.partitions(&set), Err(Error::TooManyElements {len: 5, max: 4}));

        let config = config.with_max_elements(5).with_strategy(Strategy::Powerset);
        let enumeration = config.partitions(&set).unwrap();
        assert_eq!(enumeration.len(), 52);
        assert_eq!(enumeration.calls, 541);
    }

    #[test]
    fn strategies_agree() {
        let set: BTreeSet<char> = "abcd".chars().collect();
        let results: Vec<_> = Strategy::ALL.iter().map(|s| s.enumerate(&set).family).collect();
        assert_eq!(results[0], results[1]);
        assert_eq!(results[1], results[2]);
    }
}
