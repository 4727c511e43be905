//! Breadth-first search engine.
//!
//! The engine explores jug states level by level from the all-empty state,
//! expands each state at most once and reconstructs the shortest action
//! path to the first state whose total volume equals the target.
//!
//! # Key Concepts
//!
//! - **search**: the core entry point, unbounded
//! - **Solver**: the same search with optional resource limits and statistics
//! - **SearchOutcome**: `Found(path)` or `Unreachable`; never an error
//! - **SearchError**: invalid target, invalid configuration or a hit limit

mod config;
mod engine;
mod error;
mod stats;

pub use config::{SearchConfig, SearchConfigBuilder};
pub use engine::{search, total_capacity, SearchOutcome, SearchRun, Solver};
pub use error::{ConfigViolation, SearchError};
pub use stats::SearchStats;
