//! Policy models.
//!
//! This module defines action-string handling and the name-set type used
//! by registration operations.

pub mod action;
pub mod names;

pub use names::Names;
