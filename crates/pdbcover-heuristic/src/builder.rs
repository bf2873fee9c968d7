//! Builder module for constructing estimators from configuration
//!
//! This module provides the wiring between configuration types and
//! the heuristic implementations.

use pdbcover_config::{HeuristicConfig, StrategyKind};
use pdbcover_core::{AbstractionDatabase, OperatorTable, Result};
use tracing::warn;

use crate::estimator::{Advisor, CoverHeuristic};
use crate::heuristic::Heuristic;
use crate::max_abstraction::MaxAbstractionHeuristic;

/// Builder for constructing estimators from configuration.
pub struct HeuristicBuilder;

impl HeuristicBuilder {
    /// Builds the estimator selected by `config.strategy`.
    ///
    /// # Errors
    ///
    /// Propagates construction errors of the selected estimator.
    pub fn build<S, D>(
        config: &HeuristicConfig,
        operators: &OperatorTable,
        databases: Vec<D>,
        advisor: Option<Advisor<S>>,
    ) -> Result<Box<dyn Heuristic<S>>>
    where
        S: ?Sized + 'static,
        D: AbstractionDatabase<S> + 'static,
    {
        match config.strategy {
            StrategyKind::CoverSearch => Ok(Box::new(Self::cover_search(
                config, operators, databases, advisor,
            )?)),

            StrategyKind::MaxAbstraction => {
                config.validate()?;
                if config.use_advisory || config.report_preferred {
                    warn!("Max abstraction ignores advisory and preferred-operator settings");
                }
                Ok(Box::new(Self::max_abstraction(databases)))
            }
        }
    }

    /// Creates a cover heuristic.
    pub fn cover_search<S, D>(
        config: &HeuristicConfig,
        operators: &OperatorTable,
        databases: Vec<D>,
        advisor: Option<Advisor<S>>,
    ) -> Result<CoverHeuristic<S, D>>
    where
        S: ?Sized,
        D: AbstractionDatabase<S>,
    {
        CoverHeuristic::new(config, operators, databases, advisor)
    }

    /// Creates a max-abstraction heuristic.
    pub fn max_abstraction<S, D>(databases: Vec<D>) -> MaxAbstractionHeuristic<S, D>
    where
        S: ?Sized,
        D: AbstractionDatabase<S>,
    {
        MaxAbstractionHeuristic::new(databases)
    }
}
