//! Advisory heuristic fixtures.

use std::cell::Cell;
use std::rc::Rc;

use pdbcover_core::{OperatorId, PreferredOperatorSource};

/// Suggests the same operators for every state and counts its calls.
///
/// # Example
///
/// ```
/// use pdbcover_core::PreferredOperatorSource;
/// use pdbcover_test::advisor::FixedAdvisor;
///
/// let mut advisor = FixedAdvisor::new(vec![1, 3]);
/// let calls = advisor.call_counter();
/// let mut out = Vec::new();
/// advisor.preferred_operators(&[0u32][..], &mut out);
/// assert_eq!(out, vec![1, 3]);
/// assert_eq!(calls.get(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct FixedAdvisor {
    operators: Vec<OperatorId>,
    calls: Rc<Cell<usize>>,
}

impl FixedAdvisor {
    pub fn new(operators: Vec<OperatorId>) -> Self {
        Self {
            operators,
            calls: Rc::new(Cell::new(0)),
        }
    }

    /// Shared handle on the number of queries answered so far.
    pub fn call_counter(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.calls)
    }
}

impl<S: ?Sized> PreferredOperatorSource<S> for FixedAdvisor {
    fn preferred_operators(&mut self, _state: &S, out: &mut Vec<OperatorId>) {
        self.calls.set(self.calls.get() + 1);
        out.extend_from_slice(&self.operators);
    }
}
