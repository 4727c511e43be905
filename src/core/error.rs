//! Errors raised when checking moves and paths.

use thiserror::Error;

/// A move that the generator would never produce from the given state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("Jug {jug} does not exist ({jugs} jugs)")]
    UnknownJug { jug: usize, jugs: usize },

    #[error("State has {found} jugs, expected {expected}")]
    JugCountMismatch { expected: usize, found: usize },

    #[error("Jug {jug} can only be filled when empty (holds {volume})")]
    FillNotEmpty { jug: usize, volume: u64 },

    #[error("Jug {jug} is already empty")]
    AlreadyEmpty { jug: usize },

    #[error("Cannot transfer jug {jug} into itself")]
    SelfTransfer { jug: usize },

    #[error("Cannot transfer from jug {jug}: it is empty")]
    SourceEmpty { jug: usize },

    #[error("Cannot transfer into jug {jug}: it is full")]
    DestinationFull { jug: usize },

    #[error("Move claims {claimed} liters but {actual} would move")]
    AmountMismatch { claimed: u64, actual: u64 },
}

/// A recorded path that does not replay from the all-empty state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("Step {step} starts from {found}, expected {expected}")]
    Discontinuous {
        step: usize,
        expected: String,
        found: String,
    },

    #[error("Step {step} is illegal: {source}")]
    IllegalMove {
        step: usize,
        #[source]
        source: MoveError,
    },

    #[error("Step {step} records {recorded}, but the move yields {derived}")]
    ResultMismatch {
        step: usize,
        recorded: String,
        derived: String,
    },
}
