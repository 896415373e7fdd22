//! Fluent permission checks.
//!
//! A thin ergonomic layer over [`Policy::authorize`]:
//! `policy.can(viewer).perform("user:read").on(&entity)`, optionally with
//! `.having(&value)` before `.on`. No routing logic lives here.

use warden_core::Result;

use crate::engine::node::Policy;

/// A permission check in progress, holding the viewer.
pub struct Check<'a, S, R, V = ()> {
    policy: &'a Policy<S, R, V>,
    viewer: &'a S,
}

impl<'a, S, R, V> Check<'a, S, R, V> {
    pub(crate) fn new(policy: &'a Policy<S, R, V>, viewer: &'a S) -> Self {
        Self { policy, viewer }
    }

    /// Name the action to check.
    pub fn perform(self, action: &'a str) -> Attempt<'a, S, R, V> {
        Attempt {
            policy: self.policy,
            viewer: self.viewer,
            action,
            value: None,
        }
    }
}

/// A named action awaiting its target entity.
pub struct Attempt<'a, S, R, V = ()> {
    policy: &'a Policy<S, R, V>,
    viewer: &'a S,
    action: &'a str,
    value: Option<&'a V>,
}

impl<'a, S, R, V> Attempt<'a, S, R, V> {
    /// Attach contextual data to the check.
    pub fn having(mut self, value: &'a V) -> Self {
        self.value = Some(value);
        self
    }

    /// Run the check against the given entity.
    ///
    /// # Returns
    ///
    /// The verdict of [`Policy::authorize`] for the accumulated viewer,
    /// action and value.
    pub fn on(self, entity: &R) -> Result<bool> {
        self.policy
            .authorize(self.viewer, self.action, entity, self.value)
    }
}
