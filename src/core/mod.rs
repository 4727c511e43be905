//! Core state and move model.
//!
//! This module contains the pure building blocks of the search:
//! - `JugState`: immutable per-jug volumes
//! - `Move` and `Action`: labeled transitions between states
//! - `successors` / `apply_move`: move generation and legality
//! - `ActionPath`: ordered, replayable solution paths

pub mod action;
pub mod error;
pub mod history;
pub mod moves;
pub mod state;

pub use action::{Action, Move};
pub use error::{MoveError, PathError};
pub use history::ActionPath;
pub use moves::{apply_move, successors};
pub use state::JugState;
