//! Exportable search reports.
//!
//! A [`SearchReport`] captures the inputs, outcome and statistics of one
//! search in a versioned, self-checking document. Reports encode to JSON
//! for display and to bincode for compact storage.

use crate::core::ActionPath;
use crate::search::{total_capacity, SearchOutcome, SearchRun, SearchStats};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::ReportError;

/// Version identifier for report format
pub const REPORT_VERSION: u32 = 1;

/// Serializable record of a search run.
///
/// # Example
///
/// ```rust
/// use jugsearch::report::SearchReport;
/// use jugsearch::search::Solver;
///
/// let run = Solver::default().run(&[3, 5], 4).unwrap();
/// let report = SearchReport::new(&[3, 5], 4, &run);
///
/// let json = report.to_json().unwrap();
/// let restored = SearchReport::from_json(&json).unwrap();
///
/// assert!(restored.found);
/// assert_eq!(restored.path.len(), 7);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Report format version
    pub version: u32,

    /// Unique report identifier
    pub id: Uuid,

    /// When the report was created
    pub created_at: DateTime<Utc>,

    /// Jug capacities searched
    pub capacities: Vec<u64>,

    /// Requested total volume
    pub target: u64,

    /// Whether the target was reached
    pub found: bool,

    /// Shortest path found, empty when unreachable
    pub path: ActionPath,

    /// Search statistics
    pub stats: SearchStats,
}

impl SearchReport {
    /// Create a report for a finished run.
    pub fn new(capacities: &[u64], target: u64, run: &SearchRun) -> Self {
        let path = match &run.outcome {
            SearchOutcome::Found(path) => path.clone(),
            SearchOutcome::Unreachable => ActionPath::new(),
        };

        Self {
            version: REPORT_VERSION,
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            capacities: capacities.to_vec(),
            target,
            found: run.outcome.found(),
            path,
            stats: run.stats.clone(),
        }
    }

    /// Outcome recorded in this report.
    pub fn outcome(&self) -> SearchOutcome {
        if self.found {
            SearchOutcome::Found(self.path.clone())
        } else {
            SearchOutcome::Unreachable
        }
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        serde_json::to_string(self).map_err(|e| ReportError::Encode(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, ReportError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ReportError::Encode(e.to_string()))
    }

    /// Decode and validate a JSON report.
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        let report: Self = serde_json::from_str(json)
            .map_err(|e| ReportError::Decode(e.to_string()))?;
        report.validate()?;
        Ok(report)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ReportError> {
        bincode::serialize(self).map_err(|e| ReportError::Encode(e.to_string()))
    }

    /// Decode and validate a binary report.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ReportError> {
        let report: Self = bincode::deserialize(bytes)
            .map_err(|e| ReportError::Decode(e.to_string()))?;
        report.validate()?;
        Ok(report)
    }

    /// Check version and internal consistency.
    ///
    /// The capacities must sum within 64 bits. A found report must replay
    /// from the all-empty state to a total equal to its target. An
    /// unreachable report must carry an empty path.
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.version != REPORT_VERSION {
            return Err(ReportError::UnsupportedVersion {
                found: self.version,
                supported: REPORT_VERSION,
            });
        }

        total_capacity(&self.capacities).map_err(|_| ReportError::CapacityOverflow)?;

        if !self.found {
            if !self.path.is_empty() {
                return Err(ReportError::UnreachableWithPath {
                    actions: self.path.len(),
                });
            }
            return Ok(());
        }

        let reached = self.path.replay(&self.capacities)?.total();
        if reached != self.target {
            return Err(ReportError::TargetMismatch {
                reached,
                target: self.target,
            });
        }

        Ok(())
    }
}
