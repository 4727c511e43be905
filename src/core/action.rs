//! Moves and the actions that record them.

use super::state::JugState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single operation on the jugs.
///
/// The quantity carried by each variant is the volume that moved: the
/// capacity for a fill, the discarded volume for an empty and the poured
/// volume for a transfer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Move {
    /// Fill an empty jug from the source up to its capacity.
    Fill { jug: usize, amount: u64 },

    /// Pour the whole content of a jug into the sink.
    Empty { jug: usize, amount: u64 },

    /// Pour from one jug into another until the source is empty or the
    /// destination is full.
    Transfer { from: usize, to: usize, amount: u64 },
}

impl Move {
    /// Volume moved by this operation.
    pub fn amount(&self) -> u64 {
        match self {
            Self::Fill { amount, .. }
            | Self::Empty { amount, .. }
            | Self::Transfer { amount, .. } => *amount,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Fill { .. } => "fill",
            Self::Empty { .. } => "empty",
            Self::Transfer { .. } => "transfer",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fill { jug, amount } => {
                write!(f, "Fill jug {jug} to its capacity of {amount} liters")
            }
            Self::Empty { jug, amount } => {
                write!(f, "Empty jug {jug}, discarding {amount} liters")
            }
            Self::Transfer { from, to, amount } => {
                write!(f, "Transfer {amount} liters from jug {from} to jug {to}")
            }
        }
    }
}

/// One edge of the search graph: the state before, the state after and
/// the move that connects them.
///
/// Actions are immutable values. Equality and hashing are structural over
/// all three parts, so an action can key the engine's predecessor map.
///
/// # Example
///
/// ```rust
/// use jugsearch::core::{Action, JugState, Move};
///
/// let action = Action::new(
///     JugState::empty(2),
///     JugState::from(vec![3, 0]),
///     Move::Fill { jug: 0, amount: 3 },
/// );
///
/// assert_eq!(action.description(), "Fill jug 0 to its capacity of 3 liters");
/// assert_eq!(action.curr_state().total(), 3);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Action {
    prev_state: JugState,
    curr_state: JugState,
    #[serde(rename = "move")]
    step: Move,
}

impl Action {
    pub fn new(prev_state: JugState, curr_state: JugState, step: Move) -> Self {
        Self {
            prev_state,
            curr_state,
            step,
        }
    }

    /// State the action was taken from.
    pub fn prev_state(&self) -> &JugState {
        &self.prev_state
    }

    /// State the action leads to.
    pub fn curr_state(&self) -> &JugState {
        &self.curr_state
    }

    pub fn step(&self) -> &Move {
        &self.step
    }

    /// Human-readable label naming the move kind, quantity and jugs.
    pub fn description(&self) -> String {
        self.step.to_string()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: {}", self.prev_state, self.curr_state, self.step)
    }
}
