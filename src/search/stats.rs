//! Counters collected while a search runs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Statistics of one search run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// States whose successors were generated. The goal state is not
    /// expanded and is not counted.
    pub states_expanded: usize,
    /// Queue entries pushed, including the seed entry for the empty state.
    pub entries_enqueued: usize,
    /// Queue entries dropped because their state was already expanded.
    pub duplicates_discarded: usize,
    /// Largest frontier size observed.
    pub peak_queue_len: usize,
    /// Wall time spent searching.
    pub elapsed: Duration,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  States Expanded: {}", self.states_expanded)?;
        writeln!(f, "  Entries Enqueued: {}", self.entries_enqueued)?;
        writeln!(f, "  Duplicates Discarded: {}", self.duplicates_discarded)?;
        writeln!(f, "  Peak Queue Length: {}", self.peak_queue_len)?;
        write!(f, "  Elapsed (secs): {:.3}", self.elapsed.as_secs_f64())
    }
}
