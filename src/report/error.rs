//! Errors raised while encoding, decoding or checking a report.

use crate::core::PathError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to encode report: {0}")]
    Encode(String),

    #[error("Failed to decode report: {0}")]
    Decode(String),

    #[error("Report format {found} is not supported (expected {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The recorded capacities cannot be summed in 64 bits.
    #[error("Report capacities overflow a 64-bit total")]
    CapacityOverflow,

    #[error("Report path does not replay: {0}")]
    InvalidPath(#[from] PathError),

    #[error("Report path reaches a total of {reached}, expected {target}")]
    TargetMismatch { reached: u64, target: u64 },

    #[error("Unreachable report carries {actions} actions")]
    UnreachableWithPath { actions: usize },
}
