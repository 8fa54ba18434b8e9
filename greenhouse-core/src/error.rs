//! Errors in the library.
use std::path::PathBuf;
use thiserror::Error;

/// Errors in the library.
///
/// None of these are recovered locally: every failure propagates to the
/// driving caller, which halts the evaluation run rather than persist a
/// partial result set.
#[derive(Error, Debug)]
pub enum EvalError {
    /// Record key error.
    #[error("Record key error: {0}")]
    RecordKey(String),

    /// Record value type error.
    #[error("Record value type error: {0}")]
    RecordValueType(String),

    /// An invariant the caller was responsible for upholding was violated
    /// before the rollout loop started.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A step info payload is missing a required auxiliary metric.
    #[error("info payload is missing metric '{key}' at timestep {timestep}")]
    ContractViolation {
        /// The absent metric key.
        key: String,
        /// Timestep at which the payload was inspected.
        timestep: usize,
    },

    /// An expected model or statistics artifact could not be located.
    #[error("Missing resource: {0}")]
    MissingResource(PathBuf),
}
