//! Error types for nec-ir.

use thiserror::Error;

/// Errors that can occur when decoding a pulse train back into a frame.
#[derive(Debug, Error)]
pub enum NecError {
    /// The pulse train does not contain enough durations for a full frame.
    #[error("Pulse train truncated: expected {expected} durations, got {actual}")]
    Truncated {
        /// Number of durations a full frame requires.
        expected: usize,
        /// Number of durations supplied.
        actual: usize,
    },

    /// A duration at a given index does not match any expected timing.
    #[error("Unrecognized pulse at index {index}: {duration_us} us")]
    BadPulse {
        /// Index of the offending duration.
        index: usize,
        /// The duration that matched no timing slot.
        duration_us: u32,
    },

    /// The leader mark/space pair was not found at the start of the train.
    #[error("Missing leader pulse")]
    MissingLeader,
}
