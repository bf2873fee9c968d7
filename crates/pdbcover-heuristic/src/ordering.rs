//! Restriction and operator ordering.
//!
//! Sorted orders are applied once when the restrictions are built. Random
//! orders are drawn per trial by the cover solver from its owned generator.

use std::cmp::Reverse;

use pdbcover_config::{HeuristicConfig, OrderPolicy};
use pdbcover_core::OperatorId;

use crate::restriction::RestrictionSet;

/// Ordering policies for restrictions and for operators within them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OrderingPolicy {
    pub restrictions: OrderPolicy,
    pub operators: OrderPolicy,
}

impl OrderingPolicy {
    pub fn new(restrictions: OrderPolicy, operators: OrderPolicy) -> Self {
        Self {
            restrictions,
            operators,
        }
    }

    pub fn from_config(config: &HeuristicConfig) -> Self {
        Self::new(config.restriction_order, config.operator_order)
    }

    /// Returns true if the restriction order is redrawn every trial.
    pub fn shuffles_restrictions(&self) -> bool {
        self.restrictions.is_random()
    }

    /// Returns true if each operator list is redrawn every trial.
    pub fn shuffles_operators(&self) -> bool {
        self.operators.is_random()
    }

    /// Applies the `Sorted` policies to a freshly built set.
    ///
    /// Random and original policies leave the identity orders untouched.
    pub fn apply_static(&self, set: &mut RestrictionSet) {
        if self.restrictions == OrderPolicy::Sorted {
            sort_by_size(&mut set.order, &set.restrictions);
        }
        if self.operators == OrderPolicy::Sorted {
            for ops in &mut set.restrictions {
                sort_by_mentions(ops, &set.operator_restrictions);
            }
        }
    }
}

/// Stable sort of restriction ids, fewest operators first.
pub fn sort_by_size(order: &mut [usize], restrictions: &[Vec<OperatorId>]) {
    order.sort_by_key(|&r| restrictions[r].len());
}

/// Stable sort of operator ids, most mentioned first.
pub fn sort_by_mentions(ops: &mut [OperatorId], operator_restrictions: &[Vec<usize>]) {
    ops.sort_by_key(|&op| Reverse(operator_restrictions[op].len()));
}
