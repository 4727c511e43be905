//! Ordered action paths.
//!
//! An [`ActionPath`] is the answer of a successful search: the actions
//! that lead from the all-empty state to a goal state, in order.

use super::action::Action;
use super::error::PathError;
use super::moves::apply_move;
use super::state::JugState;
use serde::{Deserialize, Serialize};

/// Ordered sequence of actions.
///
/// Paths are immutable - the `record` method returns a new path with the
/// action appended.
///
/// # Example
///
/// ```rust
/// use jugsearch::core::{Action, ActionPath, JugState, Move};
///
/// let path = ActionPath::new().record(Action::new(
///     JugState::empty(2),
///     JugState::from(vec![0, 5]),
///     Move::Fill { jug: 1, amount: 5 },
/// ));
///
/// let states = path.states();
/// assert_eq!(states.len(), 2); // (0, 0) -> (0, 5)
/// assert_eq!(path.replay(&[3, 5]), Ok(JugState::from(vec![0, 5])));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionPath {
    actions: Vec<Action>,
}

impl ActionPath {
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    /// Build a path from actions already in chronological order.
    pub fn from_actions(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    /// Record an action, returning a new path.
    ///
    /// The existing path is left untouched.
    pub fn record(&self, action: Action) -> Self {
        let mut actions = self.actions.clone();
        actions.push(action);
        Self { actions }
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn into_actions(self) -> Vec<Action> {
        self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// States traversed: the first action's previous state, then the
    /// resulting state of every action. Empty for an empty path.
    pub fn states(&self) -> Vec<&JugState> {
        let mut states = Vec::new();
        if let Some(first) = self.actions.first() {
            states.push(first.prev_state());
        }
        for action in &self.actions {
            states.push(action.curr_state());
        }
        states
    }

    /// Resulting state of the last action, if any.
    pub fn final_state(&self) -> Option<&JugState> {
        self.actions.last().map(Action::curr_state)
    }

    pub fn descriptions(&self) -> Vec<String> {
        self.actions.iter().map(Action::description).collect()
    }

    /// Replay the path from the all-empty state.
    ///
    /// Every action must start where the previous one ended, must be a
    /// legal move, and must record the state that move actually yields.
    /// Returns the state reached after the last action.
    pub fn replay(&self, capacities: &[u64]) -> Result<JugState, PathError> {
        let mut current = JugState::empty(capacities.len());

        for (step, action) in self.actions.iter().enumerate() {
            if action.prev_state() != &current {
                return Err(PathError::Discontinuous {
                    step,
                    expected: current.to_string(),
                    found: action.prev_state().to_string(),
                });
            }

            let derived = apply_move(&current, action.step(), capacities)
                .map_err(|source| PathError::IllegalMove { step, source })?;

            if &derived != action.curr_state() {
                return Err(PathError::ResultMismatch {
                    step,
                    recorded: action.curr_state().to_string(),
                    derived: derived.to_string(),
                });
            }

            current = derived;
        }

        Ok(current)
    }
}

impl IntoIterator for ActionPath {
    type Item = Action;
    type IntoIter = std::vec::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}

impl<'a> IntoIterator for &'a ActionPath {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}
