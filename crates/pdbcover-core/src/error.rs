//! Error types for pdbcover

use thiserror::Error;

/// Main error type for pdbcover operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PdbCoverError {
    /// Error in heuristic configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Operator table or abstraction collection is malformed
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    /// A restriction still has a positive lower bound but its operators
    /// cannot lower it (every operator in the list costs zero, or the list
    /// is empty). Scanning it would never end.
    #[error(
        "Restriction {restriction} cannot be covered: lower bound {bound} remains \
         but its operators have zero total cost"
    )]
    UncoverableRestriction {
        /// Index of the offending restriction (same as its abstraction index).
        restriction: usize,
        /// Remaining lower bound when the scan was about to start.
        bound: i64,
    },

    /// Advisory seeding was requested but no advisory source was supplied
    #[error("Advisory seeding is enabled but no advisory heuristic was supplied")]
    MissingAdvisor,
}

/// Result type alias for pdbcover operations
pub type Result<T> = std::result::Result<T, PdbCoverError>;
