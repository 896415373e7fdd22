//! # Warden Policy
//!
//! `warden_policy` provides hierarchical authorization policies for the
//! Warden system. A policy routes colon-namespaced actions (e.g.
//! `"user:posts:read"`) either to a locally registered decision function
//! (a "concern") or to a nested sub-policy, recursively, until a concern
//! answers or nothing matches — in which case the action is denied.
//!
//! Key concepts:
//!
//! 1. **Concern**: A named decision function registered directly on a
//!    policy, keyed by the final segment of an action string.
//!
//! 2. **Nested policy**: A named child policy owning its own concerns and
//!    children, keyed by the first segment of an action string.
//!
//! 3. **Default deny**: An action that no concern or nested policy
//!    matches is denied; absence is never an error.
//!
//! ## Usage Example
//!
//! ```rust
//! use warden_policy::Policy;
//!
//! let mut policy: Policy<&str, &str> = Policy::new();
//! policy.register("read", |_request| Ok(true));
//! policy.include_with("posts", |posts| {
//!     posts.register("edit", |request| Ok(*request.viewer == "admin"));
//! });
//!
//! assert!(policy.can(&"guest").perform("read").on(&"front-page").unwrap());
//! assert!(policy.can(&"admin").perform("posts:edit").on(&"post-1").unwrap());
//! assert!(!policy.can(&"guest").perform("posts:edit").on(&"post-1").unwrap());
//! ```

pub mod engine;
pub mod model;

// Re-export key types for convenience
pub use engine::{Attempt, Check, Policy};
pub use model::Names;
pub use warden_core::{AccessRequest, Decision, Error, PolicyError, Result};
