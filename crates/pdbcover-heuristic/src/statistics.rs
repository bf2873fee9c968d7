//! Evaluation statistics.
//!
//! Counters updated on every call to a heuristic's `estimate`.

/// Counters for one heuristic instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluationStatistics {
    /// States evaluated.
    pub evaluations: u64,
    /// Evaluations that returned a dead end.
    pub dead_ends: u64,
    /// Cover trials run across all evaluations.
    pub trials: u64,
    /// Sum of all finite estimates.
    pub value_sum: u64,
}

impl EvaluationStatistics {
    /// Creates empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_dead_end(&mut self) {
        self.evaluations += 1;
        self.dead_ends += 1;
    }

    /// Records a finite estimate obtained from `trials` trials.
    pub fn record_estimate(&mut self, value: u64, trials: usize) {
        self.evaluations += 1;
        self.trials += trials as u64;
        self.value_sum = self.value_sum.saturating_add(value);
    }

    /// Returns the fraction of evaluations that were dead ends.
    pub fn dead_end_rate(&self) -> f64 {
        if self.evaluations == 0 {
            0.0
        } else {
            self.dead_ends as f64 / self.evaluations as f64
        }
    }

    /// Returns the mean of the finite estimates.
    pub fn mean_estimate(&self) -> f64 {
        let finite = self.evaluations - self.dead_ends;
        if finite == 0 {
            0.0
        } else {
            self.value_sum as f64 / finite as f64
        }
    }
}
