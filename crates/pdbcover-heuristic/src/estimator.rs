//! Operator-cover heuristic.
//!
//! Reads every abstraction's value for the state, turns the values into
//! restriction bounds and returns the cheapest of several randomized cover
//! trials.
//!
//! Logging levels:
//! - **INFO**: Configuration summary at construction
//! - **DEBUG**: Dead ends and failed evaluations
//! - **TRACE**: Per-trial values and per-state estimates

use std::fmt::{self, Debug};

use pdbcover_config::HeuristicConfig;
use pdbcover_core::{
    AbstractionDatabase, Distance, Estimate, OperatorId, OperatorTable, PdbCoverError,
    PreferredOperatorSource, Result,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, trace};

use crate::cover::{CoverSolver, TrialPlan};
use crate::heuristic::{Heuristic, HeuristicProperties};
use crate::ordering::OrderingPolicy;
use crate::preferred::PreferredOperators;
use crate::restriction::{RestrictionBuilder, RestrictionSet};
use crate::statistics::EvaluationStatistics;

/// Boxed advisory heuristic for states of type `S`.
pub type Advisor<S> = Box<dyn PreferredOperatorSource<S>>;

/// Inadmissible estimate from randomized greedy operator covers.
///
/// # Example
///
/// ```
/// use pdbcover_config::HeuristicConfig;
/// use pdbcover_core::{Estimate, OperatorTable};
/// use pdbcover_heuristic::{CoverHeuristic, Heuristic};
/// use pdbcover_test::LookupDatabase;
///
/// let operators = OperatorTable::from_costs(&[1, 2, 3]);
/// let databases = vec![LookupDatabase::constant(&[0, 1, 2], 4)];
/// let mut h: CoverHeuristic<[u32], _> =
///     CoverHeuristic::new(&HeuristicConfig::default(), &operators, databases, None).unwrap();
///
/// assert_eq!(h.estimate(&[0][..]).unwrap(), Estimate::Finite(6));
/// ```
pub struct CoverHeuristic<S: ?Sized, D> {
    databases: Vec<D>,
    advisor: Option<Advisor<S>>,
    restrictions: RestrictionSet,
    solver: CoverSolver,
    rng: StdRng,
    trials: usize,
    initial_bounds: Vec<i64>,
    advisory: Vec<OperatorId>,
    preferred: Option<PreferredOperators>,
    statistics: EvaluationStatistics,
}

impl<S, D> CoverHeuristic<S, D>
where
    S: ?Sized,
    D: AbstractionDatabase<S>,
{
    /// Builds the restrictions and buffers for `databases`.
    ///
    /// The advisor is only kept when `config.use_advisory` is set.
    ///
    /// # Errors
    ///
    /// - [`PdbCoverError::Config`] if the configuration is out of range.
    /// - [`PdbCoverError::MissingAdvisor`] if advisory seeding is enabled
    ///   without an advisor.
    pub fn new(
        config: &HeuristicConfig,
        operators: &OperatorTable,
        databases: Vec<D>,
        advisor: Option<Advisor<S>>,
    ) -> Result<Self> {
        config.validate()?;
        let advisor = match (config.use_advisory, advisor) {
            (true, None) => return Err(PdbCoverError::MissingAdvisor),
            (true, advisor) => advisor,
            (false, Some(_)) => {
                debug!("Advisory seeding disabled, ignoring supplied advisor");
                None
            }
            (false, None) => None,
        };

        let policy = OrderingPolicy::from_config(config);
        let restrictions = RestrictionBuilder::new(operators, policy).build::<S, D>(&databases);
        let solver = CoverSolver::new(TrialPlan::new(config.decrement, policy), &restrictions);
        let preferred = config
            .report_preferred
            .then(|| PreferredOperators::new(config.preferred_mode, operators.len()));

        info!(
            event = "heuristic_ready",
            strategy = "cover_search",
            trials = config.trials,
            restriction_order = ?config.restriction_order,
            operator_order = ?config.operator_order,
            decrement = ?config.decrement,
            seed = config.random_seed,
            advisory = advisor.is_some(),
            preferred = ?preferred.as_ref().map(PreferredOperators::mode),
        );

        Ok(Self {
            initial_bounds: vec![0; databases.len()],
            databases,
            advisor,
            restrictions,
            solver,
            rng: StdRng::seed_from_u64(config.random_seed),
            trials: config.trials,
            advisory: Vec::new(),
            preferred,
            statistics: EvaluationStatistics::new(),
        })
    }

    pub fn restrictions(&self) -> &RestrictionSet {
        &self.restrictions
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Usage counts of the last trial run.
    pub fn last_usage(&self) -> &[u64] {
        self.solver.usage()
    }

    // Returns false as soon as a database reports the state unreachable.
    fn load_bounds(&mut self, state: &S) -> bool {
        for (bound, db) in self.initial_bounds.iter_mut().zip(&self.databases) {
            match db.value(state) {
                Distance::Finite(value) => *bound = i64::from(value),
                Distance::Unreachable => return false,
            }
        }
        true
    }

    fn run_trials(&mut self) -> Result<u64> {
        let mut best = u64::MAX;
        for trial in 0..self.trials {
            let value = self.solver.run_trial(
                &mut self.restrictions,
                &self.initial_bounds,
                &self.advisory,
                &mut self.rng,
            )?;
            trace!(event = "trial", trial, value);
            if let Some(preferred) = &mut self.preferred {
                preferred.record_trial(self.solver.usage(), value < best);
            }
            best = best.min(value);
        }
        Ok(best)
    }
}

impl<S, D> Heuristic<S> for CoverHeuristic<S, D>
where
    S: ?Sized,
    D: AbstractionDatabase<S>,
{
    fn estimate(&mut self, state: &S) -> Result<Estimate> {
        if let Some(preferred) = &mut self.preferred {
            preferred.begin_state();
        }

        if !self.load_bounds(state) {
            self.statistics.record_dead_end();
            debug!(event = "dead_end");
            return Ok(Estimate::DeadEnd);
        }

        self.advisory.clear();
        if let Some(advisor) = &mut self.advisor {
            advisor.preferred_operators(state, &mut self.advisory);
        }

        let best = self.run_trials().inspect_err(|err| {
            debug!(event = "estimate_failed", error = %err);
        })?;

        if let Some(preferred) = &mut self.preferred {
            preferred.finish_state();
        }
        self.statistics.record_estimate(best, self.trials);
        trace!(event = "estimate", value = best, trials = self.trials);
        Ok(Estimate::Finite(best))
    }

    fn preferred_operators(&self) -> &[OperatorId] {
        self.preferred.as_ref().map_or(&[], |preferred| preferred.ids())
    }

    fn name(&self) -> &'static str {
        "CoverSearch"
    }

    fn properties(&self) -> HeuristicProperties {
        HeuristicProperties {
            admissible: false,
            consistent: false,
            safe: true,
            preferred_operators: self.preferred.is_some(),
        }
    }

    fn statistics(&self) -> &EvaluationStatistics {
        &self.statistics
    }
}

impl<S: ?Sized, D> Debug for CoverHeuristic<S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoverHeuristic")
            .field("databases", &self.databases.len())
            .field("restrictions", &self.restrictions.restriction_count())
            .field("plan", &self.solver.plan())
            .field("trials", &self.trials)
            .field("advisory", &self.advisor.is_some())
            .field("statistics", &self.statistics)
            .finish()
    }
}

#[cfg(test)]
#[path = "estimator_tests.rs"]
mod tests;
