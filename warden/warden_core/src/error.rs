//! Error types for the Warden authorization system.
//!
//! This module defines the error hierarchy used throughout the system.
//! Note that an absent concern or sub-policy is not an error condition:
//! the engine answers such requests with a deny decision, and these types
//! are only produced by decision functions themselves.

use thiserror::Error;

/// Root error type for the Warden system.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Policy error: {0}")]
    Policy(#[from] PolicyError),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

/// Errors related to policy evaluation.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("Policy evaluation failed: {0}")]
    EvaluationFailed(String),
}
