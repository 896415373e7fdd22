//! Decision function type.
//!
//! This module defines the callable type that callers supply to answer
//! fully-resolved permission checks.

use crate::types::AccessRequest;
use crate::Result;

/// A caller-supplied predicate determining permission for a concern.
///
/// The engine treats decisions as opaque: it invokes one at most once per
/// authorization call and returns its verdict unchanged. `Ok(true)` grants,
/// `Ok(false)` denies, and an `Err` propagates unmodified through every
/// delegation frame to the top-level caller.
pub type Decision<S, R, V = ()> =
    dyn Fn(&AccessRequest<'_, S, R, V>) -> Result<bool> + Send + Sync;
