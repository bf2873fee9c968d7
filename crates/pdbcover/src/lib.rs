//! pdbcover - Operator-Cover Heuristics in Rust
//!
//! Turns pattern database lower bounds into an inadmissible goal-distance
//! estimate by building cheap operator multisets that satisfy every bound.
//!
//! # Example
//!
//! ```rust
//! use pdbcover::prelude::*;
//! use pdbcover_test::LookupDatabase;
//!
//! let operators = OperatorTable::from_costs(&[1, 2, 3]);
//! let databases = vec![LookupDatabase::constant(&[0, 1, 2], 4)];
//! let config = HeuristicConfig::default().with_trials(10);
//!
//! let mut heuristic =
//!     HeuristicBuilder::build::<[u32], _>(&config, &operators, databases, None).unwrap();
//! assert_eq!(heuristic.estimate(&[0][..]).unwrap(), Estimate::Finite(6));
//! ```

// Model types
pub use pdbcover_core::{
    AbstractionDatabase, Cost, Distance, Estimate, Operator, OperatorId, OperatorTable,
    PdbCoverError, PreferredOperatorSource, Result,
};

// Configuration
pub use pdbcover_config::{
    ConfigError, DecrementMode, HeuristicConfig, OrderPolicy, PreferredMode, StrategyKind,
};

// Estimators
pub use pdbcover_heuristic::{
    Advisor, CoverHeuristic, EvaluationStatistics, Heuristic, HeuristicBuilder,
    HeuristicProperties, MaxAbstractionHeuristic,
};

pub mod logging;

/// Lower-level building blocks of the cover heuristic.
pub mod cover {
    pub use pdbcover_heuristic::{
        weighted_usage, CoverSolver, OrderingPolicy, PreferredOperators, RestrictionBuilder,
        RestrictionSet, RestrictionStats, TrialPlan,
    };
}

pub mod prelude {
    pub use super::{
        AbstractionDatabase, Distance, Estimate, Operator, OperatorId, OperatorTable,
        PreferredOperatorSource,
    };
    pub use super::{DecrementMode, HeuristicConfig, OrderPolicy, PreferredMode, StrategyKind};
    pub use super::{Heuristic, HeuristicBuilder};
}
