//! Randomized greedy operator cover.
//!
//! One trial walks the restrictions in order and, for each restriction whose
//! bound is still positive, scans its operators cyclically, adding one use of
//! the operator under the cursor until the bound drops to zero or below. The
//! trial value is the total cost of the chosen operator multiset.
//!
//! The decrement mode is resolved once into a [`TrialPlan`]; each mode has
//! its own loop.

use pdbcover_config::DecrementMode;
use pdbcover_core::{Cost, OperatorId, PdbCoverError, Result};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::ordering::OrderingPolicy;
use crate::restriction::RestrictionSet;

/// Per-trial choices resolved once from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialPlan {
    pub decrement: DecrementMode,
    pub shuffle_restrictions: bool,
    pub shuffle_operators: bool,
}

impl TrialPlan {
    pub fn new(decrement: DecrementMode, policy: OrderingPolicy) -> Self {
        Self {
            decrement,
            shuffle_restrictions: policy.shuffles_restrictions(),
            shuffle_operators: policy.shuffles_operators(),
        }
    }
}

/// Runs cover trials over a [`RestrictionSet`].
///
/// Owns the usage counts and remaining bounds; both are sized once and
/// overwritten in place by every trial.
///
/// # Example
///
/// ```
/// use pdbcover_config::DecrementMode;
/// use pdbcover_core::OperatorTable;
/// use pdbcover_heuristic::{CoverSolver, OrderingPolicy, RestrictionBuilder, TrialPlan};
/// use pdbcover_test::LookupDatabase;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let operators = OperatorTable::from_costs(&[1, 2, 3]);
/// let databases = vec![LookupDatabase::constant(&[0, 1, 2], 4)];
/// let policy = OrderingPolicy::default();
/// let mut set = RestrictionBuilder::new(&operators, policy).build::<[u32], _>(&databases);
///
/// let mut solver = CoverSolver::new(TrialPlan::new(DecrementMode::Iterative, policy), &set);
/// let mut rng = StdRng::seed_from_u64(0);
/// let value = solver.run_trial(&mut set, &[4], &[], &mut rng).unwrap();
///
/// assert_eq!(value, 6);
/// assert_eq!(solver.usage(), &[1, 1, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct CoverSolver {
    plan: TrialPlan,
    usage: Vec<u64>,
    bounds: Vec<i64>,
}

impl CoverSolver {
    pub fn new(plan: TrialPlan, set: &RestrictionSet) -> Self {
        Self {
            plan,
            usage: vec![0; set.operator_count()],
            bounds: vec![0; set.restriction_count()],
        }
    }

    pub fn plan(&self) -> TrialPlan {
        self.plan
    }

    /// Usage counts of the last trial, indexed by operator id.
    pub fn usage(&self) -> &[u64] {
        &self.usage
    }

    /// Remaining bounds after the last trial, indexed by restriction.
    pub fn bounds(&self) -> &[i64] {
        &self.bounds
    }

    /// Runs one trial and returns its value, `Σ cost × usage`.
    ///
    /// `initial` holds one bound per restriction and is copied, never
    /// modified. `advisory` operators are used once each before the greedy
    /// scan starts.
    ///
    /// # Errors
    ///
    /// - [`PdbCoverError::InvalidModel`] if `set` is not the shape this
    ///   solver was sized for, `initial` has the wrong length, or an advisory
    ///   id is out of range.
    /// - [`PdbCoverError::UncoverableRestriction`] if a restriction with a
    ///   positive bound has operators of zero total cost.
    pub fn run_trial<R>(
        &mut self,
        set: &mut RestrictionSet,
        initial: &[i64],
        advisory: &[OperatorId],
        rng: &mut R,
    ) -> Result<u64>
    where
        R: Rng + ?Sized,
    {
        if set.operator_count() != self.usage.len()
            || set.restriction_count() != self.bounds.len()
        {
            return Err(PdbCoverError::InvalidModel(format!(
                "solver sized for {} operators and {} restrictions, got {} and {}",
                self.usage.len(),
                self.bounds.len(),
                set.operator_count(),
                set.restriction_count()
            )));
        }
        if initial.len() != self.bounds.len() {
            return Err(PdbCoverError::InvalidModel(format!(
                "expected {} restriction bounds, got {}",
                self.bounds.len(),
                initial.len()
            )));
        }

        self.usage.fill(0);
        self.bounds.copy_from_slice(initial);
        self.seed(set, advisory)?;

        if self.plan.shuffle_restrictions {
            set.order.shuffle(rng);
        }

        match self.plan.decrement {
            DecrementMode::Iterative => self.cover_iterative(set, rng)?,
            DecrementMode::Before => self.cover_before(set, rng)?,
        }

        Ok(weighted_usage(&self.usage, &set.costs))
    }

    fn seed(&mut self, set: &RestrictionSet, advisory: &[OperatorId]) -> Result<()> {
        for &op in advisory {
            let Some(containing) = set.operator_restrictions.get(op) else {
                return Err(PdbCoverError::InvalidModel(format!(
                    "advisory operator {op} is out of range"
                )));
            };
            self.usage[op] += 1;
            let cost = i64::from(set.costs[op]);
            for &r in containing {
                self.bounds[r] -= cost;
            }
        }
        Ok(())
    }

    /// Every use lowers all restrictions containing the operator at once.
    fn cover_iterative<R>(&mut self, set: &mut RestrictionSet, rng: &mut R) -> Result<()>
    where
        R: Rng + ?Sized,
    {
        let RestrictionSet {
            costs,
            restrictions,
            operator_restrictions,
            order,
            total_costs,
        } = set;

        for &r in order.iter() {
            let ops = &mut restrictions[r];
            if self.plan.shuffle_operators {
                ops.shuffle(rng);
            }
            if self.bounds[r] <= 0 {
                continue;
            }
            ensure_coverable(r, self.bounds[r], total_costs[r])?;

            let mut cursor = 0;
            while self.bounds[r] > 0 {
                let op = ops[cursor];
                self.usage[op] += 1;
                let cost = i64::from(costs[op]);
                for &other in &operator_restrictions[op] {
                    self.bounds[other] -= cost;
                }
                cursor = (cursor + 1) % ops.len();
            }
        }
        Ok(())
    }

    /// Uses only lower the restriction being covered; a restriction first
    /// subtracts what earlier restrictions already spent on its operators.
    fn cover_before<R>(&mut self, set: &mut RestrictionSet, rng: &mut R) -> Result<()>
    where
        R: Rng + ?Sized,
    {
        let RestrictionSet {
            costs,
            restrictions,
            order,
            total_costs,
            ..
        } = set;

        for &r in order.iter() {
            let ops = &mut restrictions[r];
            for &op in ops.iter() {
                if self.bounds[r] <= 0 {
                    break;
                }
                self.bounds[r] -= contribution(costs[op], self.usage[op]);
            }
            if self.plan.shuffle_operators {
                ops.shuffle(rng);
            }
            if self.bounds[r] <= 0 {
                continue;
            }
            ensure_coverable(r, self.bounds[r], total_costs[r])?;

            let mut cursor = 0;
            while self.bounds[r] > 0 {
                let op = ops[cursor];
                self.usage[op] += 1;
                self.bounds[r] -= i64::from(costs[op]);
                cursor = (cursor + 1) % ops.len();
            }
        }
        Ok(())
    }
}

// A full pass over the list lowers the bound by exactly the total cost.
fn ensure_coverable(restriction: usize, bound: i64, total_cost: u64) -> Result<()> {
    if total_cost == 0 {
        return Err(PdbCoverError::UncoverableRestriction { restriction, bound });
    }
    Ok(())
}

fn contribution(cost: Cost, uses: u64) -> i64 {
    i64::from(cost).saturating_mul(i64::try_from(uses).unwrap_or(i64::MAX))
}

/// `Σ cost × usage` over all operators.
pub fn weighted_usage(usage: &[u64], costs: &[Cost]) -> u64 {
    usage
        .iter()
        .zip(costs)
        .map(|(&uses, &cost)| uses * u64::from(cost))
        .sum()
}

#[cfg(test)]
#[path = "cover_tests.rs"]
mod tests;
