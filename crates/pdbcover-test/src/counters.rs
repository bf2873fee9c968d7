//! Counter task fixtures.
//!
//! A state is a vector of counters. Each operator raises exactly one
//! counter by one and has a cost. The goal is every counter at its target;
//! counters never go down, so overshooting a target is a dead end.
//!
//! One projection per counter plays the role of a pattern database.
//!
//! # Example
//!
//! ```
//! use pdbcover_core::{AbstractionDatabase, Distance};
//! use pdbcover_test::counters::CounterTask;
//!
//! // counter 0 raised by op0 (cost 2) or op1 (cost 3); counter 1 by op2 (cost 1)
//! let task = CounterTask::new(vec![2, 1], &[(0, 2), (0, 3), (1, 1)]);
//! let dbs = task.projections();
//! assert_eq!(dbs[0].value(&[0, 0][..]), Distance::Finite(4));
//! assert_eq!(dbs[1].value(&[0, 0][..]), Distance::Finite(1));
//! assert_eq!(dbs[1].value(&[0, 2][..]), Distance::Unreachable);
//! ```

use pdbcover_core::{AbstractionDatabase, Cost, Distance, Operator, OperatorTable};

/// A task of independent counters.
#[derive(Clone, Debug)]
pub struct CounterTask {
    pub targets: Vec<u32>,
    pub operators: OperatorTable,
    /// Counter raised by each operator, indexed by operator id.
    pub effects: Vec<usize>,
}

impl CounterTask {
    /// Creates a task from counter targets and `(counter, cost)` operators.
    pub fn new(targets: Vec<u32>, operators: &[(usize, Cost)]) -> Self {
        let mut table = OperatorTable::default();
        let mut effects = Vec::with_capacity(operators.len());
        for &(counter, cost) in operators {
            table.push(cost, format!("inc-{counter}-{}", effects.len()));
            effects.push(counter);
        }
        Self {
            targets,
            operators: table,
            effects,
        }
    }

    /// All counters at zero.
    pub fn initial_state(&self) -> Vec<u32> {
        vec![0; self.targets.len()]
    }

    /// All counters at their targets.
    pub fn goal_state(&self) -> Vec<u32> {
        self.targets.clone()
    }

    /// Applies an operator to a state.
    pub fn apply(&self, state: &mut [u32], op: usize) {
        state[self.effects[op]] += 1;
    }

    /// Projection onto a single counter.
    pub fn projection(&self, counter: usize) -> ProjectionDatabase {
        let relevant: Vec<bool> = self.effects.iter().map(|&c| c == counter).collect();
        let unit_cost = self
            .operators
            .iter()
            .filter(|op| relevant[op.id])
            .map(|op| op.cost)
            .min();
        ProjectionDatabase {
            counter,
            target: self.targets[counter],
            relevant,
            unit_cost,
        }
    }

    /// One projection per counter, in counter order.
    pub fn projections(&self) -> Vec<ProjectionDatabase> {
        (0..self.targets.len()).map(|c| self.projection(c)).collect()
    }
}

/// Exact distance on a single counter: remaining steps times the cheapest
/// operator raising it.
#[derive(Clone, Debug)]
pub struct ProjectionDatabase {
    counter: usize,
    target: u32,
    relevant: Vec<bool>,
    unit_cost: Option<Cost>,
}

impl AbstractionDatabase<[u32]> for ProjectionDatabase {
    fn is_operator_relevant(&self, op: &Operator) -> bool {
        self.relevant.get(op.id).copied().unwrap_or(false)
    }

    fn value(&self, state: &[u32]) -> Distance {
        let current = state[self.counter];
        if current > self.target {
            return Distance::Unreachable;
        }
        let missing = self.target - current;
        if missing == 0 {
            return Distance::Finite(0);
        }
        match self.unit_cost {
            Some(cost) => Distance::Finite(missing * cost),
            None => Distance::Unreachable,
        }
    }
}
