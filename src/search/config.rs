//! Search configuration.
//!
//! The core search is unbounded. Callers that need bounded latency can set
//! resource limits here; a search that hits one stops with an error instead
//! of running to exhaustion.

use crate::search::error::{ConfigViolation, SearchError};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Resource limits for a search. Both limits are off by default.
///
/// # Example
///
/// ```rust
/// use jugsearch::search::SearchConfig;
///
/// let config = SearchConfig::builder()
///     .max_expansions(10_000)
///     .max_queue_len(50_000)
///     .build();
///
/// assert_eq!(config.max_expansions, Some(10_000));
/// assert!(config.validate().is_success());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum number of states to expand.
    pub max_expansions: Option<usize>,

    /// Maximum number of entries allowed in the frontier queue.
    pub max_queue_len: Option<usize>,
}

impl SearchConfig {
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::new()
    }

    /// Load a configuration from JSON. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Validate the configuration, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = vec![
            match self.max_expansions {
                Some(0) => Validation::fail(ConfigViolation::ZeroExpansionLimit),
                _ => Validation::success(()),
            },
            match self.max_queue_len {
                Some(0) => Validation::fail(ConfigViolation::ZeroQueueLimit),
                _ => Validation::success(()),
            },
        ];

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate and convert violations into a [`SearchError`].
    pub fn check(&self) -> Result<(), SearchError> {
        match self.validate() {
            Validation::Success(()) => Ok(()),
            Validation::Failure(violations) => Err(SearchError::InvalidConfig {
                violations: violations.iter().cloned().collect(),
            }),
        }
    }
}

/// Builder for [`SearchConfig`].
#[derive(Clone, Debug, Default)]
pub struct SearchConfigBuilder {
    max_expansions: Option<usize>,
    max_queue_len: Option<usize>,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self {
            max_expansions: None,
            max_queue_len: None,
        }
    }

    /// Stop after expanding `n` states.
    pub fn max_expansions(mut self, n: usize) -> Self {
        self.max_expansions = Some(n);
        self
    }

    /// Stop once the frontier holds more than `n` entries.
    pub fn max_queue_len(mut self, n: usize) -> Self {
        self.max_queue_len = Some(n);
        self
    }

    pub fn build(self) -> SearchConfig {
        SearchConfig {
            max_expansions: self.max_expansions,
            max_queue_len: self.max_queue_len,
        }
    }
}
