//! Heuristic estimates.

use std::fmt;

/// Result of evaluating a state.
///
/// `DeadEnd` compares greater than every finite value, so the minimum of a
/// set of estimates is finite whenever any member is.
///
/// # Example
///
/// ```
/// use pdbcover_core::Estimate;
///
/// assert!(Estimate::Finite(1_000_000) < Estimate::DeadEnd);
/// assert_eq!(Estimate::Finite(7).value(), Some(7));
/// assert!(Estimate::DeadEnd.is_dead_end());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Estimate {
    /// Estimated remaining cost.
    Finite(u64),
    /// No goal is reachable from the state.
    DeadEnd,
}

impl Estimate {
    pub fn is_dead_end(&self) -> bool {
        matches!(self, Estimate::DeadEnd)
    }

    pub fn value(&self) -> Option<u64> {
        match self {
            Estimate::Finite(v) => Some(*v),
            Estimate::DeadEnd => None,
        }
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Estimate::Finite(v) => write!(f, "{v}"),
            Estimate::DeadEnd => f.write_str("dead-end"),
        }
    }
}
