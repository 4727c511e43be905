//! Breadth-first search over jug states.

use crate::core::{successors, Action, ActionPath, JugState};
use crate::search::config::SearchConfig;
use crate::search::error::SearchError;
use crate::search::stats::SearchStats;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Result of a completed search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// A state with the target total was reached along this shortest path.
    Found(ActionPath),

    /// Every reachable state was expanded without meeting the target.
    Unreachable,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Actions of the solution, empty when the target is unreachable.
    pub fn path(&self) -> &[Action] {
        match self {
            Self::Found(path) => path.actions(),
            Self::Unreachable => &[],
        }
    }

    /// Split into the success flag and the ordered action list.
    pub fn into_parts(self) -> (bool, Vec<Action>) {
        match self {
            Self::Found(path) => (true, path.into_actions()),
            Self::Unreachable => (false, Vec::new()),
        }
    }
}

/// Outcome of a search together with its statistics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRun {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

/// Sum of all capacities, or an error if it does not fit in a `u64`.
pub fn total_capacity(capacities: &[u64]) -> Result<u64, SearchError> {
    capacities
        .iter()
        .try_fold(0u64, |sum, capacity| sum.checked_add(*capacity))
        .ok_or(SearchError::CapacityOverflow)
}

/// Breadth-first solver.
///
/// A solver holds only its configuration. Each call to [`Solver::run`]
/// owns its own queue, visited set and predecessor map, so a solver can be
/// reused freely.
///
/// # Example
///
/// ```rust
/// use jugsearch::search::{SearchConfig, Solver};
///
/// let solver = Solver::new(SearchConfig::builder().max_expansions(1_000).build()).unwrap();
/// let run = solver.run(&[3, 5], 4).unwrap();
///
/// assert!(run.outcome.found());
/// assert_eq!(run.outcome.path().len(), 7);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Solver {
    config: SearchConfig,
}

impl Solver {
    /// Create a solver, rejecting an invalid configuration.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        config.check()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search for a state whose total volume equals `target`.
    ///
    /// Fails with [`SearchError::InvalidTarget`] before exploring anything
    /// when the target exceeds the total capacity. An unreachable target is
    /// reported as [`SearchOutcome::Unreachable`].
    pub fn run(&self, capacities: &[u64], target: u64) -> Result<SearchRun, SearchError> {
        info!(?capacities, target, "starting water jug search");

        let sum = total_capacity(capacities)?;
        if sum < target {
            return Err(SearchError::InvalidTarget { sum, target });
        }

        let started = Instant::now();
        let mut stats = SearchStats::default();

        // Duplicate states are tolerated in the queue and dropped when dequeued.
        let mut queue: VecDeque<(Option<Action>, JugState)> = VecDeque::new();
        let mut visited: HashSet<JugState> = HashSet::new();
        let mut predecessors: HashMap<Action, Option<Action>> = HashMap::new();

        queue.push_back((None, JugState::empty(capacities.len())));
        stats.entries_enqueued = 1;
        stats.peak_queue_len = 1;

        while let Some((trigger, state)) = queue.pop_front() {
            if visited.contains(&state) {
                stats.duplicates_discarded += 1;
                continue;
            }

            if state.total() == target {
                let path = reconstruct(&predecessors, trigger);
                stats.elapsed = started.elapsed();
                debug!(steps = path.len(), final_state = %state, ?stats, "target reached");
                return Ok(SearchRun {
                    outcome: SearchOutcome::Found(path),
                    stats,
                });
            }

            if let Some(limit) = self.config.max_expansions {
                if stats.states_expanded >= limit {
                    warn!(limit, "expansion limit reached");
                    return Err(SearchError::ExpansionLimitReached { limit });
                }
            }

            for action in successors(&state, capacities) {
                let next = action.curr_state().clone();
                predecessors.insert(action.clone(), trigger.clone());
                queue.push_back((Some(action), next));
                stats.entries_enqueued += 1;
            }

            visited.insert(state);
            stats.states_expanded += 1;
            stats.peak_queue_len = stats.peak_queue_len.max(queue.len());

            if let Some(limit) = self.config.max_queue_len {
                if queue.len() > limit {
                    warn!(limit, queued = queue.len(), "queue limit reached");
                    return Err(SearchError::QueueLimitReached { limit });
                }
            }
        }

        stats.elapsed = started.elapsed();
        debug!(?stats, "search space exhausted");
        Ok(SearchRun {
            outcome: SearchOutcome::Unreachable,
            stats,
        })
    }
}

/// Search with the default, unbounded configuration.
///
/// # Example
///
/// ```rust
/// use jugsearch::search::{search, SearchError};
///
/// let outcome = search(&[2], 2).unwrap();
/// assert!(outcome.found());
/// assert_eq!(outcome.path()[0].description(), "Fill jug 0 to its capacity of 2 liters");
///
/// assert!(!search(&[2], 1).unwrap().found());
///
/// assert_eq!(
///     search(&[4, 3], 10),
///     Err(SearchError::InvalidTarget { sum: 7, target: 10 })
/// );
/// ```
pub fn search(capacities: &[u64], target: u64) -> Result<SearchOutcome, SearchError> {
    Solver::default()
        .run(capacities, target)
        .map(|run| run.outcome)
}

/// Walk predecessor links back from `trigger` and return the actions in
/// chronological order.
fn reconstruct(
    predecessors: &HashMap<Action, Option<Action>>,
    trigger: Option<Action>,
) -> ActionPath {
    let mut actions = Vec::new();
    let mut current = trigger;

    while let Some(action) = current {
        current = predecessors.get(&action).cloned().flatten();
        actions.push(action);
    }

    actions.reverse();
    ActionPath::from_actions(actions)
}
