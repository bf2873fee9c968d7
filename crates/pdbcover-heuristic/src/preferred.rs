//! Preferred-operator bookkeeping across the trials of one state.

use pdbcover_config::PreferredMode;
use pdbcover_core::OperatorId;

/// Flags operators used by the cover trials of the current state.
///
/// # Example
///
/// ```
/// use pdbcover_config::PreferredMode;
/// use pdbcover_heuristic::PreferredOperators;
///
/// let mut preferred = PreferredOperators::new(PreferredMode::Union, 3);
/// preferred.begin_state();
/// preferred.record_trial(&[1, 0, 0], true);
/// preferred.record_trial(&[0, 0, 2], false);
/// preferred.finish_state();
/// assert_eq!(preferred.ids(), &[0, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct PreferredOperators {
    mode: PreferredMode,
    flags: Vec<bool>,
    ids: Vec<OperatorId>,
}

impl PreferredOperators {
    pub fn new(mode: PreferredMode, operator_count: usize) -> Self {
        Self {
            mode,
            flags: vec![false; operator_count],
            ids: Vec::new(),
        }
    }

    pub fn mode(&self) -> PreferredMode {
        self.mode
    }

    /// Clears the flags of the previous state.
    pub fn begin_state(&mut self) {
        self.flags.fill(false);
        self.ids.clear();
    }

    /// Folds in one trial's usage counts.
    ///
    /// `improves_best` tells whether the trial's value is strictly below
    /// every earlier trial of the state.
    pub fn record_trial(&mut self, usage: &[u64], improves_best: bool) {
        match self.mode {
            PreferredMode::LastTrial => self.overwrite(usage),
            PreferredMode::Union => self.mark(usage),
            PreferredMode::BestTrial => {
                if improves_best {
                    self.overwrite(usage);
                }
            }
        }
    }

    /// Collects the flagged ids in ascending order.
    pub fn finish_state(&mut self) {
        self.ids.clear();
        self.ids.extend(
            self.flags
                .iter()
                .enumerate()
                .filter(|&(_, &flagged)| flagged)
                .map(|(op, _)| op),
        );
    }

    /// Preferred operators of the last finished state.
    pub fn ids(&self) -> &[OperatorId] {
        &self.ids
    }

    fn overwrite(&mut self, usage: &[u64]) {
        for (flag, &uses) in self.flags.iter_mut().zip(usage) {
            *flag = uses > 0;
        }
    }

    fn mark(&mut self, usage: &[u64]) {
        for (flag, &uses) in self.flags.iter_mut().zip(usage) {
            *flag |= uses > 0;
        }
    }
}
