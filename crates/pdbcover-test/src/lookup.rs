//! Lookup-table abstraction fixtures.
//!
//! # Example
//!
//! ```
//! use pdbcover_core::{AbstractionDatabase, Distance, Operator};
//! use pdbcover_test::lookup::LookupDatabase;
//!
//! let db = LookupDatabase::constant(&[0, 2], 4).with_value(vec![1], Distance::Unreachable);
//! assert!(db.is_operator_relevant(&Operator::new(2, 1, "op2")));
//! assert!(!db.is_operator_relevant(&Operator::new(1, 1, "op1")));
//! assert_eq!(db.value(&[0][..]), Distance::Finite(4));
//! assert_eq!(db.value(&[1][..]), Distance::Unreachable);
//! ```

use std::collections::{BTreeSet, HashMap};

use pdbcover_core::{AbstractionDatabase, Distance, Operator, OperatorId};

/// A database with an explicit relevant-operator set and per-state values.
///
/// States are `[u32]` slices; unknown states get the default value.
#[derive(Clone, Debug)]
pub struct LookupDatabase {
    relevant: BTreeSet<OperatorId>,
    values: HashMap<Vec<u32>, Distance>,
    default: Distance,
}

impl LookupDatabase {
    /// Creates a database reporting `value` for every state.
    pub fn constant(relevant: &[OperatorId], value: u32) -> Self {
        Self {
            relevant: relevant.iter().copied().collect(),
            values: HashMap::new(),
            default: Distance::Finite(value),
        }
    }

    /// Creates a database reporting every state as unreachable.
    pub fn unreachable(relevant: &[OperatorId]) -> Self {
        Self {
            relevant: relevant.iter().copied().collect(),
            values: HashMap::new(),
            default: Distance::Unreachable,
        }
    }

    /// Overrides the value of a single state.
    pub fn with_value(mut self, state: Vec<u32>, value: Distance) -> Self {
        self.values.insert(state, value);
        self
    }
}

impl AbstractionDatabase<[u32]> for LookupDatabase {
    fn is_operator_relevant(&self, op: &Operator) -> bool {
        self.relevant.contains(&op.id)
    }

    fn value(&self, state: &[u32]) -> Distance {
        self.values.get(state).copied().unwrap_or(self.default)
    }
}
