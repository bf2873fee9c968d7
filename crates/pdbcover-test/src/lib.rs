//! Shared test fixtures for pdbcover crates.
//!
//! This crate provides small, hand-checkable inputs for the heuristic:
//!
//! - [`lookup`] - Abstraction databases with explicit relevance and value tables
//! - [`counters`] - A counter-raising task with one projection per variable
//! - [`advisor`] - A fixed advisory heuristic that counts its calls
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! pdbcover-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use pdbcover_test::lookup::LookupDatabase;
//! use pdbcover_test::counters::CounterTask;
//! ```

pub mod advisor;
pub mod counters;
pub mod lookup;

pub use advisor::FixedAdvisor;
pub use counters::{CounterTask, ProjectionDatabase};
pub use lookup::LookupDatabase;
