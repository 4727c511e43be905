//! Jugsearch: shortest solutions to the generalized water jug problem
//!
//! Given N jugs of fixed integer capacity, an unlimited source and an
//! unlimited sink, jugsearch decides whether some sequence of fill, empty
//! and transfer moves reaches a state whose total volume equals a target,
//! and returns one shortest such sequence.
//!
//! # Core Concepts
//!
//! - **JugState**: immutable per-jug volumes
//! - **Action**: a move together with the states before and after it
//! - **search**: breadth-first search from the all-empty state
//! - **SearchReport**: versioned JSON/binary export of a run
//!
//! Moves follow three rules: a jug can only be filled when it is empty, a
//! non-empty jug can be emptied, and a transfer pours until the source is
//! empty or the destination is full.
//!
//! # Example
//!
//! ```rust
//! use jugsearch::search;
//!
//! let outcome = search(&[3, 5], 4).unwrap();
//! assert!(outcome.found());
//!
//! for action in outcome.path() {
//!     println!("{}", action.description());
//! }
//!
//! let last = outcome.path().last().unwrap();
//! assert_eq!(last.curr_state().total(), 4);
//! ```

pub mod core;
pub mod report;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Action, ActionPath, JugState, Move};
pub use report::SearchReport;
pub use search::{search, SearchError, SearchOutcome, Solver};
