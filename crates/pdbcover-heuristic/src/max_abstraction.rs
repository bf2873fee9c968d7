//! Maximum over abstraction values.
//!
//! The admissible baseline the cover heuristic is compared against.

use std::fmt::{self, Debug};
use std::marker::PhantomData;

use pdbcover_core::{AbstractionDatabase, Distance, Estimate, Result};
use tracing::{debug, info, trace};

use crate::heuristic::{Heuristic, HeuristicProperties};
use crate::statistics::EvaluationStatistics;

/// Returns the largest abstraction value, or a dead end if any abstraction
/// reports the state unreachable.
///
/// # Example
///
/// ```
/// use pdbcover_core::Estimate;
/// use pdbcover_heuristic::{Heuristic, MaxAbstractionHeuristic};
/// use pdbcover_test::LookupDatabase;
///
/// let databases = vec![
///     LookupDatabase::constant(&[0], 3),
///     LookupDatabase::constant(&[1], 5),
/// ];
/// let mut h: MaxAbstractionHeuristic<[u32], _> = MaxAbstractionHeuristic::new(databases);
/// assert_eq!(h.estimate(&[0][..]).unwrap(), Estimate::Finite(5));
/// ```
pub struct MaxAbstractionHeuristic<S: ?Sized, D> {
    databases: Vec<D>,
    statistics: EvaluationStatistics,
    _state: PhantomData<fn(&S)>,
}

impl<S, D> MaxAbstractionHeuristic<S, D>
where
    S: ?Sized,
    D: AbstractionDatabase<S>,
{
    pub fn new(databases: Vec<D>) -> Self {
        info!(
            event = "heuristic_ready",
            strategy = "max_abstraction",
            databases = databases.len(),
        );
        Self {
            databases,
            statistics: EvaluationStatistics::new(),
            _state: PhantomData,
        }
    }

    pub fn databases(&self) -> &[D] {
        &self.databases
    }
}

impl<S, D> Heuristic<S> for MaxAbstractionHeuristic<S, D>
where
    S: ?Sized,
    D: AbstractionDatabase<S>,
{
    fn estimate(&mut self, state: &S) -> Result<Estimate> {
        let mut best = 0u32;
        for db in &self.databases {
            match db.value(state) {
                Distance::Finite(value) => best = best.max(value),
                Distance::Unreachable => {
                    self.statistics.record_dead_end();
                    debug!(event = "dead_end");
                    return Ok(Estimate::DeadEnd);
                }
            }
        }
        let value = u64::from(best);
        self.statistics.record_estimate(value, 0);
        trace!(event = "estimate", value);
        Ok(Estimate::Finite(value))
    }

    fn name(&self) -> &'static str {
        "MaxAbstraction"
    }

    fn properties(&self) -> HeuristicProperties {
        HeuristicProperties {
            admissible: true,
            consistent: true,
            safe: true,
            preferred_operators: false,
        }
    }

    fn statistics(&self) -> &EvaluationStatistics {
        &self.statistics
    }
}

impl<S: ?Sized, D> Debug for MaxAbstractionHeuristic<S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaxAbstractionHeuristic")
            .field("databases", &self.databases.len())
            .field("statistics", &self.statistics)
            .finish()
    }
}
