//! Search errors.

use thiserror::Error;

/// Errors that stop a search before it produces an outcome.
///
/// An unreachable target is not an error; see
/// [`SearchOutcome::Unreachable`](crate::search::SearchOutcome::Unreachable).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The target exceeds the total volume the jugs can hold.
    #[error("Sum of all capacities ({sum}) is less than target capacity {target}")]
    InvalidTarget { sum: u64, target: u64 },

    #[error("Sum of all capacities does not fit in 64 bits")]
    CapacityOverflow,

    #[error("Invalid search configuration: {}", format_violations(.violations))]
    InvalidConfig { violations: Vec<ConfigViolation> },

    #[error("Expansion limit ({limit}) reached before the target was found")]
    ExpansionLimitReached { limit: usize },

    #[error("Queue limit ({limit}) reached before the target was found")]
    QueueLimitReached { limit: usize },
}

/// A single problem with a [`SearchConfig`](crate::search::SearchConfig).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("max_expansions must be greater than zero")]
    ZeroExpansionLimit,

    #[error("max_queue_len must be greater than zero")]
    ZeroQueueLimit,
}

fn format_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
