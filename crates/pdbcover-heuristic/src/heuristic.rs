//! Strategy interface implemented by every estimator.

use pdbcover_core::{Estimate, OperatorId, Result};

use crate::statistics::EvaluationStatistics;

/// Declared properties of an estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicProperties {
    /// Never overestimates the true remaining cost.
    pub admissible: bool,
    /// Obeys the triangle inequality across transitions.
    pub consistent: bool,
    /// Only reports dead ends that really are dead ends.
    pub safe: bool,
    /// Can report preferred operators.
    pub preferred_operators: bool,
}

/// A state evaluator driven by an external search.
///
/// Calls must be sequential; `&mut self` lets estimators reuse their buffers
/// and random stream between states.
pub trait Heuristic<S: ?Sized> {
    /// Evaluates `state`.
    fn estimate(&mut self, state: &S) -> Result<Estimate>;

    /// Preferred operators of the most recently evaluated state, ascending.
    fn preferred_operators(&self) -> &[OperatorId] {
        &[]
    }

    /// Returns the estimator name for logging.
    fn name(&self) -> &'static str;

    fn properties(&self) -> HeuristicProperties;

    fn statistics(&self) -> &EvaluationStatistics;
}
