//! Operator model.
//!
//! Operators are identified by a dense id in `[0, n)` and carry a
//! non-negative integer cost. They are immutable once the table is built.

use crate::error::{PdbCoverError, Result};

/// Dense operator identifier.
pub type OperatorId = usize;

/// Non-negative operator cost.
pub type Cost = u32;

/// A planning operator as seen by the heuristic.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Operator {
    pub id: OperatorId,
    pub cost: Cost,
    pub name: String,
}

impl Operator {
    pub fn new(id: OperatorId, cost: Cost, name: impl Into<String>) -> Self {
        Self {
            id,
            cost,
            name: name.into(),
        }
    }
}

/// The task's operators, indexed by id.
///
/// # Example
///
/// ```
/// use pdbcover_core::OperatorTable;
///
/// let table = OperatorTable::from_costs(&[1, 2, 3]);
/// assert_eq!(table.len(), 3);
/// assert_eq!(table.cost(2), 3);
/// assert_eq!(table.get(1).unwrap().name, "op1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperatorTable {
    operators: Vec<Operator>,
}

impl OperatorTable {
    /// Builds a table from operators whose ids must equal their positions.
    ///
    /// # Errors
    ///
    /// Returns [`PdbCoverError::InvalidModel`] if ids are not dense and in order.
    pub fn new(operators: Vec<Operator>) -> Result<Self> {
        if let Some((pos, op)) = operators
            .iter()
            .enumerate()
            .find(|(pos, op)| op.id != *pos)
        {
            return Err(PdbCoverError::InvalidModel(format!(
                "operator '{}' has id {} but sits at position {}",
                op.name, op.id, pos
            )));
        }
        Ok(Self { operators })
    }

    /// Builds a table of anonymous operators `op0..opN` with the given costs.
    pub fn from_costs(costs: &[Cost]) -> Self {
        let operators = costs
            .iter()
            .enumerate()
            .map(|(id, &cost)| Operator::new(id, cost, format!("op{id}")))
            .collect();
        Self { operators }
    }

    /// Appends an operator, assigning it the next id.
    pub fn push(&mut self, cost: Cost, name: impl Into<String>) -> OperatorId {
        let id = self.operators.len();
        self.operators.push(Operator::new(id, cost, name));
        id
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    pub fn get(&self, id: OperatorId) -> Option<&Operator> {
        self.operators.get(id)
    }

    /// Cost of operator `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    pub fn cost(&self, id: OperatorId) -> Cost {
        self.operators[id].cost
    }

    /// Costs of all operators, indexed by id.
    pub fn costs(&self) -> Vec<Cost> {
        self.operators.iter().map(|op| op.cost).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Operator> {
        self.operators.iter()
    }
}

impl<'a> IntoIterator for &'a OperatorTable {
    type Item = &'a Operator;
    type IntoIter = std::slice::Iter<'a, Operator>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
