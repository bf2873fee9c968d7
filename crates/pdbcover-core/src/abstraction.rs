//! Collaborator traits: abstraction databases and advisory heuristics.

use std::sync::Arc;

use crate::operator::{Operator, OperatorId};

/// What an abstraction database reports for a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distance {
    /// Abstract cost-to-goal; a lower bound on the real remaining cost.
    Finite(u32),
    /// The goal cannot be reached from the abstract state.
    Unreachable,
}

impl Distance {
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Distance::Unreachable)
    }

    /// Returns the finite value, or `None` if unreachable.
    pub fn finite(&self) -> Option<u32> {
        match self {
            Distance::Finite(v) => Some(*v),
            Distance::Unreachable => None,
        }
    }
}

impl From<Option<u32>> for Distance {
    fn from(value: Option<u32>) -> Self {
        value.map_or(Distance::Unreachable, Distance::Finite)
    }
}

/// A precomputed abstraction of the task (typically a pattern database).
///
/// # Example
///
/// ```
/// use pdbcover_core::{AbstractionDatabase, Distance, Operator};
///
/// // Projection onto variable 0 of a two-variable state.
/// struct FirstVariable;
///
/// impl AbstractionDatabase<[u8; 2]> for FirstVariable {
///     fn is_operator_relevant(&self, op: &Operator) -> bool {
///         op.id % 2 == 0
///     }
///
///     fn value(&self, state: &[u8; 2]) -> Distance {
///         Distance::Finite(u32::from(state[0]))
///     }
/// }
///
/// let db = FirstVariable;
/// assert_eq!(db.value(&[3, 9]), Distance::Finite(3));
/// assert!(db.is_operator_relevant(&Operator::new(2, 1, "even")));
/// ```
pub trait AbstractionDatabase<S: ?Sized> {
    /// Returns true if the operator affects the abstraction.
    fn is_operator_relevant(&self, op: &Operator) -> bool;

    /// Abstract distance from `state` to the goal.
    fn value(&self, state: &S) -> Distance;
}

impl<S: ?Sized, D: AbstractionDatabase<S> + ?Sized> AbstractionDatabase<S> for Box<D> {
    fn is_operator_relevant(&self, op: &Operator) -> bool {
        (**self).is_operator_relevant(op)
    }

    fn value(&self, state: &S) -> Distance {
        (**self).value(state)
    }
}

impl<S: ?Sized, D: AbstractionDatabase<S> + ?Sized> AbstractionDatabase<S> for Arc<D> {
    fn is_operator_relevant(&self, op: &Operator) -> bool {
        (**self).is_operator_relevant(op)
    }

    fn value(&self, state: &S) -> Distance {
        (**self).value(state)
    }
}

/// An auxiliary heuristic suggesting operators that look useful in a state.
pub trait PreferredOperatorSource<S: ?Sized> {
    /// Appends the preferred operators of `state` to `out`.
    ///
    /// `out` is cleared by the caller; implementations only push.
    fn preferred_operators(&mut self, state: &S, out: &mut Vec<OperatorId>);
}

impl<S: ?Sized, A: PreferredOperatorSource<S> + ?Sized> PreferredOperatorSource<S> for Box<A> {
    fn preferred_operators(&mut self, state: &S, out: &mut Vec<OperatorId>) {
        (**self).preferred_operators(state, out)
    }
}
