use thiserror::Error;

use crate::sim::state::Frame;

// ---------------------------------------------------------------------------
// Error taxonomy — all errors are local to a single run, no retries
// ---------------------------------------------------------------------------

/// Errors a simulation run can surface.
#[derive(Debug, Error)]
pub enum SimError {
    /// A configuration field is outside its valid range. Raised before the
    /// first integration step; the simulation never starts.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The atmosphere or wind provider could not answer a query. The run
    /// aborts with no partial trajectory; re-fetching forecast data is the
    /// caller's responsibility.
    #[error("atmospheric data unavailable: {0}")]
    DataUnavailable(String),

    /// The integrated state became non-finite or left the physically
    /// credible envelope. Carries the last valid frame so callers can see
    /// where the run stood when it aborted.
    #[error(
        "integration failed at t={:.1}s, alt={:.1}m: {}",
        .frame.time,
        .frame.altitude,
        .reason
    )]
    Integration { frame: Box<Frame>, reason: String },
}
