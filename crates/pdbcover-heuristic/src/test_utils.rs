//! Test utilities for pdbcover-heuristic
//!
//! Provides common fixtures used across the crate's test modules.
//! Re-exports fixtures from pdbcover-test and adds heuristic-specific helpers.

use pdbcover_config::{DecrementMode, HeuristicConfig};
use pdbcover_core::{Cost, OperatorId, OperatorTable};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub use pdbcover_test::{CounterTask, FixedAdvisor, LookupDatabase, ProjectionDatabase};

use crate::cover::{CoverSolver, TrialPlan};
use crate::estimator::CoverHeuristic;
use crate::ordering::OrderingPolicy;
use crate::restriction::{RestrictionBuilder, RestrictionSet};

/// Cover heuristic over lookup databases and `[u32]` states.
pub type LookupHeuristic = CoverHeuristic<[u32], LookupDatabase>;

/// Lookup databases with the given relevant operators and constant values.
pub fn lookup_databases(restrictions: &[&[OperatorId]], values: &[u32]) -> Vec<LookupDatabase> {
    restrictions
        .iter()
        .zip(values)
        .map(|(ops, &value)| LookupDatabase::constant(ops, value))
        .collect()
}

/// Builds a restriction set from explicit operator lists.
pub fn build_set(
    costs: &[Cost],
    restrictions: &[&[OperatorId]],
    policy: OrderingPolicy,
) -> RestrictionSet {
    let operators = OperatorTable::from_costs(costs);
    let databases = lookup_databases(restrictions, &vec![0; restrictions.len()]);
    RestrictionBuilder::new(&operators, policy).build::<[u32], _>(&databases)
}

/// A solver for `set` using the given decrement mode and policy.
pub fn solver_for(
    set: &RestrictionSet,
    decrement: DecrementMode,
    policy: OrderingPolicy,
) -> CoverSolver {
    CoverSolver::new(TrialPlan::new(decrement, policy), set)
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A cover heuristic over explicit restrictions with constant values.
pub fn lookup_heuristic(
    config: &HeuristicConfig,
    costs: &[Cost],
    restrictions: &[&[OperatorId]],
    values: &[u32],
) -> LookupHeuristic {
    let operators = OperatorTable::from_costs(costs);
    CoverHeuristic::new(config, &operators, lookup_databases(restrictions, values), None)
        .expect("valid heuristic")
}
