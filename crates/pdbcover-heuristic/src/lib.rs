//! pdbcover heuristic engine
//!
//! This crate provides the operator-cover estimator including:
//! - Restriction building from abstraction relevance
//! - Static and per-trial ordering policies
//! - The greedy cover solver in both decrement modes
//! - Preferred-operator bookkeeping
//! - The max-abstraction baseline
//! - Configuration wiring (builder module)

pub mod builder;
pub mod cover;
pub mod estimator;
pub mod heuristic;
pub mod max_abstraction;
pub mod ordering;
pub mod preferred;
pub mod restriction;
pub mod statistics;

pub use builder::HeuristicBuilder;
pub use cover::{weighted_usage, CoverSolver, TrialPlan};
pub use estimator::{Advisor, CoverHeuristic};
pub use heuristic::{Heuristic, HeuristicProperties};
pub use max_abstraction::MaxAbstractionHeuristic;
pub use ordering::{sort_by_mentions, sort_by_size, OrderingPolicy};
pub use preferred::PreferredOperators;
pub use restriction::{RestrictionBuilder, RestrictionSet, RestrictionStats};
pub use statistics::EvaluationStatistics;

#[cfg(test)]
pub mod test_utils;
