//! Configuration system for pdbcover.
//!
//! Load heuristic configuration from TOML or YAML to control trial count,
//! orderings and decrement mode without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use pdbcover_config::{DecrementMode, HeuristicConfig, OrderPolicy};
//!
//! let config = HeuristicConfig::from_toml_str(r#"
//!     trials = 20
//!     restriction_order = "random"
//!     operator_order = "sort"
//!     decrement = "before"
//!     random_seed = 7
//! "#).unwrap();
//!
//! assert_eq!(config.trials, 20);
//! assert_eq!(config.restriction_order, OrderPolicy::Random);
//! assert_eq!(config.decrement, DecrementMode::Before);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use pdbcover_config::HeuristicConfig;
//!
//! let config = HeuristicConfig::load("pdbcover.toml").unwrap_or_default();
//! assert_eq!(config.trials, 1);
//! ```

use std::path::Path;

use pdbcover_core::PdbCoverError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest accepted trial count.
pub const MIN_TRIALS: usize = 1;

/// Largest accepted trial count.
pub const MAX_TRIALS: usize = 1000;

/// Largest accepted random seed (2^31 - 2).
pub const MAX_SEED: u64 = 2_147_483_646;

/// Default pattern generation description handed to the host.
pub const DEFAULT_PATTERNS: &str = "systematic(4)";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for PdbCoverError {
    fn from(err: ConfigError) -> Self {
        PdbCoverError::Config(err.to_string())
    }
}

/// Main heuristic configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct HeuristicConfig {
    /// Which estimator to build.
    pub strategy: StrategyKind,

    /// Pattern generation method. Opaque here; resolved by the host
    /// that builds the abstraction databases.
    pub patterns: String,

    /// Number of randomized trials per state, in `[1, 1000]`.
    pub trials: usize,

    /// Order in which restrictions are visited.
    pub restriction_order: OrderPolicy,

    /// Order in which operators are scanned inside a restriction.
    pub operator_order: OrderPolicy,

    /// How chosen operators lower the bounds of other restrictions.
    pub decrement: DecrementMode,

    /// Random seed, in `[0, 2^31 - 2]`.
    pub random_seed: u64,

    /// Seed every trial with the advisory heuristic's preferred operators.
    pub use_advisory: bool,

    /// Report operators used by the construction as preferred.
    pub report_preferred: bool,

    /// How preferred-operator flags combine across trials.
    pub preferred_mode: PreferredMode,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            patterns: DEFAULT_PATTERNS.to_string(),
            trials: MIN_TRIALS,
            restriction_order: OrderPolicy::default(),
            operator_order: OrderPolicy::default(),
            decrement: DecrementMode::default(),
            random_seed: 0,
            use_advisory: false,
            report_preferred: false,
            preferred_mode: PreferredMode::default(),
        }
    }
}

impl HeuristicConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or
    /// holds out-of-range values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the declared bounds of `trials` and `random_seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdbcover_config::HeuristicConfig;
    ///
    /// assert!(HeuristicConfig::new().with_trials(1000).validate().is_ok());
    /// assert!(HeuristicConfig::new().with_trials(0).validate().is_err());
    /// assert!(HeuristicConfig::new().with_random_seed(1 << 31).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_TRIALS..=MAX_TRIALS).contains(&self.trials) {
            return Err(ConfigError::Invalid(format!(
                "trials must be in [{MIN_TRIALS}, {MAX_TRIALS}], got {}",
                self.trials
            )));
        }
        if self.random_seed > MAX_SEED {
            return Err(ConfigError::Invalid(format!(
                "random_seed must be in [0, {MAX_SEED}], got {}",
                self.random_seed
            )));
        }
        Ok(())
    }

    /// Sets the estimator strategy.
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the pattern generation description.
    pub fn with_patterns(mut self, patterns: impl Into<String>) -> Self {
        self.patterns = patterns.into();
        self
    }

    /// Sets the number of trials per state.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Sets the restriction order policy.
    pub fn with_restriction_order(mut self, order: OrderPolicy) -> Self {
        self.restriction_order = order;
        self
    }

    /// Sets the operator order policy.
    pub fn with_operator_order(mut self, order: OrderPolicy) -> Self {
        self.operator_order = order;
        self
    }

    /// Sets the decrement mode.
    pub fn with_decrement(mut self, decrement: DecrementMode) -> Self {
        self.decrement = decrement;
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = seed;
        self
    }

    /// Enables or disables advisory seeding.
    pub fn with_advisory(mut self, enabled: bool) -> Self {
        self.use_advisory = enabled;
        self
    }

    /// Enables preferred-operator reporting with the given combination mode.
    pub fn with_preferred(mut self, mode: PreferredMode) -> Self {
        self.report_preferred = true;
        self.preferred_mode = mode;
        self
    }
}

/// Estimator strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Randomized greedy operator cover over the abstraction bounds.
    #[default]
    CoverSearch,

    /// Maximum over the abstraction values.
    MaxAbstraction,
}

/// Ordering policy for restrictions or operators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderPolicy {
    /// Sorted once at construction.
    ///
    /// Restrictions: ascending by number of operators.
    /// Operators: descending by number of restrictions mentioning them.
    #[serde(rename = "sort")]
    Sorted,

    /// Reshuffled at the start of every trial.
    Random,

    /// Insertion order (restriction index, operator id).
    #[default]
    #[serde(rename = "default", alias = "original")]
    Original,
}

impl OrderPolicy {
    pub fn is_random(&self) -> bool {
        matches!(self, OrderPolicy::Random)
    }
}

/// How a chosen operator lowers restriction bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecrementMode {
    /// Only the restriction being covered is lowered while scanning; each
    /// later restriction first subtracts the cost already chosen for its
    /// operators.
    Before,

    /// Every restriction containing the operator is lowered immediately.
    #[default]
    Iterative,
}

/// How preferred-operator flags combine across the trials of one state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferredMode {
    /// Each trial overwrites the flags; the last trial's operators survive.
    #[default]
    LastTrial,

    /// Flags accumulate over all trials.
    Union,

    /// Flags of the trial that produced the returned minimum.
    BestTrial,
}
