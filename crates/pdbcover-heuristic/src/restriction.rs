//! Restrictions derived from abstraction databases.
//!
//! Each abstraction database yields one restriction: the operators relevant
//! to it, whose weighted usage must cover the database's value in the
//! current state. The inverse index maps every operator back to the
//! restrictions mentioning it.
//!
//! Logging levels:
//! - **INFO**: One summary line when the restrictions are built

use pdbcover_core::{AbstractionDatabase, Cost, OperatorId, OperatorTable};
use tracing::info;

use crate::ordering::OrderingPolicy;

/// Restrictions, inverse index and visitation orders.
///
/// Built once by [`RestrictionBuilder`]. Afterwards only the orderings
/// change, and only when a random policy reshuffles them per trial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestrictionSet {
    /// Operator costs, indexed by operator id.
    pub(crate) costs: Vec<Cost>,
    /// Operators of each restriction, in scan order.
    pub(crate) restrictions: Vec<Vec<OperatorId>>,
    /// Restrictions mentioning each operator, ascending.
    pub(crate) operator_restrictions: Vec<Vec<usize>>,
    /// Restriction visitation order.
    pub(crate) order: Vec<usize>,
    /// Summed cost of each restriction's operators.
    pub(crate) total_costs: Vec<u64>,
}

impl RestrictionSet {
    pub fn operator_count(&self) -> usize {
        self.costs.len()
    }

    pub fn restriction_count(&self) -> usize {
        self.restrictions.len()
    }

    /// Operators of restriction `r` in their current scan order.
    ///
    /// # Panics
    ///
    /// Panics if `r` is out of range.
    pub fn operators(&self, r: usize) -> &[OperatorId] {
        &self.restrictions[r]
    }

    /// Restrictions containing operator `op`.
    ///
    /// # Panics
    ///
    /// Panics if `op` is out of range.
    pub fn restrictions_of(&self, op: OperatorId) -> &[usize] {
        &self.operator_restrictions[op]
    }

    /// Current restriction visitation order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn costs(&self) -> &[Cost] {
        &self.costs
    }

    /// Summed cost of the operators of restriction `r`.
    ///
    /// A positive bound can only be covered when this is non-zero.
    ///
    /// # Panics
    ///
    /// Panics if `r` is out of range.
    pub fn total_cost(&self, r: usize) -> u64 {
        self.total_costs[r]
    }

    /// Size and density figures for diagnostics.
    pub fn stats(&self) -> RestrictionStats {
        let mentions: usize = self.operator_restrictions.iter().map(Vec::len).sum();
        let members: usize = self.restrictions.iter().map(Vec::len).sum();
        RestrictionStats {
            operator_count: self.operator_count(),
            restriction_count: self.restriction_count(),
            mean_mentions: mentions.checked_div(self.operator_count()).unwrap_or(0),
            mean_operators: members.checked_div(self.restriction_count()).unwrap_or(0),
        }
    }
}

/// Diagnostic figures of a [`RestrictionSet`].
///
/// Means are truncated integer averages, zero when nothing is averaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestrictionStats {
    pub operator_count: usize,
    pub restriction_count: usize,
    /// Average number of restrictions mentioning an operator.
    pub mean_mentions: usize,
    /// Average number of operators in a restriction.
    pub mean_operators: usize,
}

/// Builds a [`RestrictionSet`] from operators and abstraction databases.
///
/// # Example
///
/// ```
/// use pdbcover_core::OperatorTable;
/// use pdbcover_heuristic::{OrderingPolicy, RestrictionBuilder};
/// use pdbcover_test::LookupDatabase;
///
/// let operators = OperatorTable::from_costs(&[1, 1, 1]);
/// let databases = vec![
///     LookupDatabase::constant(&[0, 1, 2], 3),
///     LookupDatabase::constant(&[1], 1),
/// ];
/// let set = RestrictionBuilder::new(&operators, OrderingPolicy::default())
///     .build::<[u32], _>(&databases);
///
/// assert_eq!(set.operators(0), &[0, 1, 2]);
/// assert_eq!(set.restrictions_of(1), &[0, 1]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RestrictionBuilder<'a> {
    operators: &'a OperatorTable,
    policy: OrderingPolicy,
}

impl<'a> RestrictionBuilder<'a> {
    pub fn new(operators: &'a OperatorTable, policy: OrderingPolicy) -> Self {
        Self { operators, policy }
    }

    /// Builds one restriction per database and applies the static orderings.
    pub fn build<S, D>(&self, databases: &[D]) -> RestrictionSet
    where
        S: ?Sized,
        D: AbstractionDatabase<S>,
    {
        let costs = self.operators.costs();

        let restrictions: Vec<Vec<OperatorId>> = databases
            .iter()
            .map(|db| {
                self.operators
                    .iter()
                    .filter(|op| db.is_operator_relevant(op))
                    .map(|op| op.id)
                    .collect()
            })
            .collect();

        let mut operator_restrictions = vec![Vec::new(); costs.len()];
        for (r, ops) in restrictions.iter().enumerate() {
            for &op in ops {
                operator_restrictions[op].push(r);
            }
        }

        let total_costs = restrictions
            .iter()
            .map(|ops| ops.iter().map(|&op| u64::from(costs[op])).sum())
            .collect();

        let mut set = RestrictionSet {
            costs,
            order: (0..restrictions.len()).collect(),
            restrictions,
            operator_restrictions,
            total_costs,
        };
        self.policy.apply_static(&mut set);

        let stats = set.stats();
        info!(
            event = "restrictions_built",
            operator_count = stats.operator_count,
            restriction_count = stats.restriction_count,
            mean_mentions = stats.mean_mentions,
            mean_operators = stats.mean_operators,
        );

        set
    }
}

#[cfg(test)]
#[path = "restriction_tests.rs"]
mod tests;
