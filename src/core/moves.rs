//! Move generation and move legality.
//!
//! [`successors`] enumerates every legal move from a state. The order is
//! fixed: fills by ascending jug, then empties by ascending jug, then
//! transfers by ascending source and ascending destination. The search
//! engine relies on this order to break ties between equally short paths.
//!
//! [`apply_move`] re-derives a single move and rejects anything the
//! generator would not have produced.

use super::action::{Action, Move};
use super::error::MoveError;
use super::state::JugState;

/// Every successor of `state`, each paired with the action that reaches it.
///
/// Assumes `state` fits `capacities`.
///
/// # Example
///
/// ```rust
/// use jugsearch::core::{successors, JugState};
///
/// let next = successors(&JugState::from(vec![3, 0]), &[3, 5]);
/// let labels: Vec<String> = next.iter().map(|a| a.description()).collect();
///
/// assert_eq!(
///     labels,
///     vec![
///         "Fill jug 1 to its capacity of 5 liters",
///         "Empty jug 0, discarding 3 liters",
///         "Transfer 3 liters from jug 0 to jug 1",
///     ]
/// );
/// ```
pub fn successors(state: &JugState, capacities: &[u64]) -> Vec<Action> {
    let volumes = state.volumes();
    let mut actions = Vec::new();

    for (jug, _) in volumes.iter().enumerate().filter(|(_, v)| **v == 0) {
        actions.push(fill(state, capacities, jug));
    }

    for (jug, _) in volumes.iter().enumerate().filter(|(_, v)| **v > 0) {
        actions.push(empty(state, jug));
    }

    for (from, _) in volumes.iter().enumerate().filter(|(_, v)| **v > 0) {
        for (to, volume) in volumes.iter().enumerate() {
            if to != from && *volume < capacities[to] {
                actions.push(transfer(state, capacities, from, to));
            }
        }
    }

    actions
}

/// Apply a single move to `state`, checking that it is legal.
///
/// The move's recorded amount must match what the move actually pours.
///
/// # Example
///
/// ```rust
/// use jugsearch::core::{apply_move, JugState, Move, MoveError};
///
/// let state = JugState::from(vec![3, 3]);
/// let next = apply_move(&state, &Move::Transfer { from: 0, to: 1, amount: 2 }, &[3, 5]);
/// assert_eq!(next, Ok(JugState::from(vec![1, 5])));
///
/// let refill = apply_move(&state, &Move::Fill { jug: 0, amount: 3 }, &[3, 5]);
/// assert_eq!(refill, Err(MoveError::FillNotEmpty { jug: 0, volume: 3 }));
/// ```
pub fn apply_move(
    state: &JugState,
    step: &Move,
    capacities: &[u64],
) -> Result<JugState, MoveError> {
    if state.len() != capacities.len() {
        return Err(MoveError::JugCountMismatch {
            expected: capacities.len(),
            found: state.len(),
        });
    }

    let action = match *step {
        Move::Fill { jug, .. } => {
            check_jug(jug, capacities)?;
            let volume = state.volume(jug);
            if volume != 0 {
                return Err(MoveError::FillNotEmpty { jug, volume });
            }
            fill(state, capacities, jug)
        }
        Move::Empty { jug, .. } => {
            check_jug(jug, capacities)?;
            if state.volume(jug) == 0 {
                return Err(MoveError::AlreadyEmpty { jug });
            }
            empty(state, jug)
        }
        Move::Transfer { from, to, .. } => {
            check_jug(from, capacities)?;
            check_jug(to, capacities)?;
            if from == to {
                return Err(MoveError::SelfTransfer { jug: from });
            }
            if state.volume(from) == 0 {
                return Err(MoveError::SourceEmpty { jug: from });
            }
            if state.volume(to) >= capacities[to] {
                return Err(MoveError::DestinationFull { jug: to });
            }
            transfer(state, capacities, from, to)
        }
    };

    let actual = action.step().amount();
    if actual != step.amount() {
        return Err(MoveError::AmountMismatch {
            claimed: step.amount(),
            actual,
        });
    }

    Ok(action.curr_state().clone())
}

fn check_jug(jug: usize, capacities: &[u64]) -> Result<(), MoveError> {
    if jug < capacities.len() {
        Ok(())
    } else {
        Err(MoveError::UnknownJug {
            jug,
            jugs: capacities.len(),
        })
    }
}

fn fill(state: &JugState, capacities: &[u64], jug: usize) -> Action {
    let amount = capacities[jug];
    Action::new(
        state.clone(),
        state.with_volume(jug, amount),
        Move::Fill { jug, amount },
    )
}

fn empty(state: &JugState, jug: usize) -> Action {
    let amount = state.volume(jug);
    Action::new(state.clone(), state.with_volume(jug, 0), Move::Empty { jug, amount })
}

fn transfer(state: &JugState, capacities: &[u64], from: usize, to: usize) -> Action {
    let offer = (capacities[to] - state.volume(to)).min(state.volume(from));
    let mut volumes = state.volumes().to_vec();
    volumes[to] += offer;
    volumes[from] -= offer;
    Action::new(
        state.clone(),
        JugState::from_volumes(volumes),
        Move::Transfer {
            from,
            to,
            amount: offer,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(actions: &[Action]) -> Vec<String> {
        actions.iter().map(Action::description).collect()
    }

    #[test]
    fn empty_state_only_offers_fills() {
        let actions = successors(&JugState::empty(2), &[3, 5]);
        assert_eq!(
            labels(&actions),
            vec![
                "Fill jug 0 to its capacity of 3 liters",
                "Fill jug 1 to its capacity of 5 liters",
            ]
        );
    }

    #[test]
    fn fill_is_only_offered_for_empty_jugs() {
        let actions = successors(&JugState::from(vec![1, 0]), &[3, 5]);
        assert!(actions
            .iter()
            .all(|a| !matches!(a.step(), Move::Fill { jug: 0, .. })));
        assert!(actions
            .iter()
            .any(|a| matches!(a.step(), Move::Fill { jug: 1, .. })));
    }

    #[test]
    fn generation_order_is_fill_empty_transfer() {
        let actions = successors(&JugState::from(vec![2, 0, 4]), &[3, 5, 7]);
        assert_eq!(
            labels(&actions),
            vec![
                "Fill jug 1 to its capacity of 5 liters",
                "Empty jug 0, discarding 2 liters",
                "Empty jug 2, discarding 4 liters",
                "Transfer 2 liters from jug 0 to jug 1",
                "Transfer 2 liters from jug 0 to jug 2",
                "Transfer 1 liters from jug 2 to jug 0",
                "Transfer 4 liters from jug 2 to jug 1",
            ]
        );
    }

    #[test]
    fn transfer_stops_when_destination_is_full() {
        let actions = successors(&JugState::from(vec![0, 5]), &[3, 5]);
        let pour = actions
            .iter()
            .find(|a| matches!(a.step(), Move::Transfer { .. }))
            .unwrap();

        assert_eq!(pour.curr_state(), &JugState::from(vec![3, 2]));
        assert_eq!(pour.step().amount(), 3);
    }

    #[test]
    fn full_destination_gets_no_transfer() {
        let actions = successors(&JugState::from(vec![3, 5]), &[3, 5]);
        assert!(actions
            .iter()
            .all(|a| !matches!(a.step(), Move::Transfer { .. })));
        assert_eq!(actions.len(), 2);
    }

    #[test]
    fn every_successor_stays_within_capacity() {
        let capacities = [3, 5, 7];
        let state = JugState::from(vec![1, 5, 2]);
        for action in successors(&state, &capacities) {
            assert!(action.curr_state().fits(&capacities), "{action}");
            assert_eq!(action.prev_state(), &state);
            assert!(action.step().amount() > 0);
        }
    }

    #[test]
    fn zero_capacity_jug_offers_a_no_op_fill() {
        let actions = successors(&JugState::empty(1), &[0]);
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].curr_state(), &JugState::empty(1));
    }

    #[test]
    fn apply_move_agrees_with_generator() {
        let capacities = [3, 5, 7];
        let state = JugState::from(vec![0, 4, 6]);
        for action in successors(&state, &capacities) {
            let derived = apply_move(&state, action.step(), &capacities).unwrap();
            assert_eq!(&derived, action.curr_state());
        }
    }

    #[test]
    fn apply_move_rejects_illegal_moves() {
        let capacities = [3, 5];
        let state = JugState::from(vec![0, 5]);

        assert_eq!(
            apply_move(&state, &Move::Empty { jug: 0, amount: 0 }, &capacities),
            Err(MoveError::AlreadyEmpty { jug: 0 })
        );
        assert_eq!(
            apply_move(&state, &Move::Fill { jug: 2, amount: 1 }, &capacities),
            Err(MoveError::UnknownJug { jug: 2, jugs: 2 })
        );
        assert_eq!(
            apply_move(
                &state,
                &Move::Transfer {
                    from: 1,
                    to: 1,
                    amount: 1
                },
                &capacities
            ),
            Err(MoveError::SelfTransfer { jug: 1 })
        );
        assert_eq!(
            apply_move(
                &state,
                &Move::Transfer {
                    from: 0,
                    to: 1,
                    amount: 1
                },
                &capacities
            ),
            Err(MoveError::SourceEmpty { jug: 0 })
        );
        assert_eq!(
            apply_move(
                &JugState::from(vec![3, 5]),
                &Move::Transfer {
                    from: 0,
                    to: 1,
                    amount: 1
                },
                &capacities
            ),
            Err(MoveError::DestinationFull { jug: 1 })
        );
    }

    #[test]
    fn apply_move_rejects_wrong_amount() {
        let result = apply_move(
            &JugState::from(vec![0, 5]),
            &Move::Transfer {
                from: 1,
                to: 0,
                amount: 5,
            },
            &[3, 5],
        );
        assert_eq!(
            result,
            Err(MoveError::AmountMismatch {
                claimed: 5,
                actual: 3
            })
        );
    }

    #[test]
    fn apply_move_rejects_wrong_jug_count() {
        let result = apply_move(&JugState::empty(3), &Move::Fill { jug: 0, amount: 3 }, &[3, 5]);
        assert_eq!(
            result,
            Err(MoveError::JugCountMismatch {
                expected: 2,
                found: 3
            })
        );
    }
}
