//! # Warden Core
//!
//! Core types for the Warden authorization system.
//!
//! This crate defines the fundamental types shared between the policy
//! engine and its callers:
//!
//! - The error hierarchy for authorization operations
//! - The access request record handed to decision functions
//! - The decision function type itself
//!
//! The `warden_core` crate is deliberately minimal and focuses on defining
//! interfaces rather than implementations. The policy engine that routes
//! access requests to decision functions lives in `warden_policy`.

pub mod error;
pub mod types;

// Re-export key items for convenience
pub use error::{Error, PolicyError};
pub use types::{AccessRequest, Decision};

/// A type alias for Result with our error types
pub type Result<T, E = error::Error> = std::result::Result<T, E>;
