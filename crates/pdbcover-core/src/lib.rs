//! pdbcover Core - shared types for the operator-cover heuristic
//!
//! This crate provides the vocabulary the heuristic crates share:
//! - Operator ids, costs and the dense operator table
//! - Traits for abstraction databases and advisory heuristics
//! - The `Estimate` returned per state
//! - The crate-wide error type

pub mod abstraction;
pub mod error;
pub mod estimate;
pub mod operator;


pub use abstraction::{AbstractionDatabase, Distance, PreferredOperatorSource};
pub use error::{PdbCoverError, Result};
pub use estimate::Estimate;
pub use operator::{Cost, Operator, OperatorId, OperatorTable};
