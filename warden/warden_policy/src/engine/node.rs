//! Policy nodes.
//!
//! This module provides the policy node, the single entity of the
//! authorization model. A node holds two string-keyed maps: concern name
//! to decision function, and namespace name to nested policy. Evaluation
//! is recursive: a node either resolves an action directly or forwards a
//! reduced action to a nested policy.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, trace};
use warden_core::types::{AccessRequest, Decision};
use warden_core::Result;

use crate::engine::check::Check;
use crate::model::{action, Names};

/// A policy node.
///
/// `S` is the viewer type, `R` the entity type and `V` the optional
/// contextual value type. The node never inspects these payloads; it only
/// forwards them to decision functions.
///
/// Registration takes `&mut self` and evaluation takes `&self`, so the
/// borrow checker enforces the build-then-evaluate contract: concerns and
/// nested policies cannot change while authorization calls are in flight
/// on the same node.
pub struct Policy<S, R, V = ()> {
    /// Decision functions, indexed by concern name.
    concerns: HashMap<String, Arc<Decision<S, R, V>>>,

    /// Nested policies, indexed by namespace name.
    children: HashMap<String, Arc<Policy<S, R, V>>>,
}

impl<S, R, V> Policy<S, R, V> {
    /// Create a new empty policy.
    pub fn new() -> Self {
        Self {
            concerns: HashMap::new(),
            children: HashMap::new(),
        }
    }

    /// Register a decision function under one or more concern names.
    ///
    /// Registration is insert-or-replace: a later registration for the
    /// same name silently overwrites the earlier one. Names are not
    /// validated; a name containing a colon is accepted but can never be
    /// reached by the lookup rules.
    ///
    /// # Arguments
    ///
    /// * `names` - One concern name or a set of concern names.
    /// * `decision` - The decision function to bind under each name.
    pub fn register<F>(&mut self, names: impl Into<Names>, decision: F)
    where
        F: Fn(&AccessRequest<'_, S, R, V>) -> Result<bool> + Send + Sync + 'static,
    {
        let decision: Arc<Decision<S, R, V>> = Arc::new(decision);

        for name in names.into().into_vec() {
            self.concerns.insert(name, Arc::clone(&decision));
        }
    }

    /// Attach an existing policy under one or more namespace names.
    ///
    /// The policy is attached as one shared instance: when several names
    /// are given, they all delegate into the same node. Attachment is
    /// insert-or-replace; a later `include` for the same name overwrites
    /// the earlier binding rather than merging into it.
    ///
    /// # Arguments
    ///
    /// * `names` - One namespace name or a set of namespace names.
    /// * `policy` - The policy to attach.
    pub fn include(&mut self, names: impl Into<Names>, policy: Policy<S, R, V>) {
        let policy = Arc::new(policy);

        for name in names.into().into_vec() {
            self.children.insert(name, Arc::clone(&policy));
        }
    }

    /// Build and attach a nested policy under one or more namespace names.
    ///
    /// The builder runs exactly once against a fresh empty policy, even
    /// when several names are given; the built node is then shared across
    /// all of them, exactly as with [`Policy::include`].
    ///
    /// # Arguments
    ///
    /// * `names` - One namespace name or a set of namespace names.
    /// * `build` - A callback that populates the fresh policy.
    pub fn include_with(
        &mut self,
        names: impl Into<Names>,
        build: impl FnOnce(&mut Policy<S, R, V>),
    ) {
        let mut policy = Policy::new();
        build(&mut policy);

        self.include(names, policy);
    }

    /// Start a fluent permission check for the given viewer.
    pub fn can<'a>(&'a self, viewer: &'a S) -> Check<'a, S, R, V> {
        Check::new(self, viewer)
    }

    /// Decide whether `viewer` may perform `action` on `entity`.
    ///
    /// Resolution is recursive: when the action carries a namespace and a
    /// nested policy is attached under it, the reduced action is forwarded
    /// there — delegation always wins over concern lookup, and at most one
    /// delegation happens per level. Otherwise the final action segment is
    /// looked up among this node's concerns. An action nothing matches is
    /// denied, not an error.
    ///
    /// # Arguments
    ///
    /// * `viewer` - The acting subject.
    /// * `action` - The action string, e.g. `"user:posts:read"`.
    /// * `entity` - The entity the action targets.
    /// * `value` - Optional contextual data forwarded to the decision.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The action is permitted.
    /// * `Ok(false)` - The action is denied, or nothing matched it.
    /// * `Err` - A decision function failed; the error is passed through
    ///   unmodified.
    pub fn authorize(&self, viewer: &S, action: &str, entity: &R, value: Option<&V>) -> Result<bool> {
        let namespace = action::policy_name(action);

        if !namespace.is_empty() {
            if let Some(child) = self.children.get(namespace) {
                let rest = action::sub_action(action);
                trace!("delegating '{}' to nested policy '{}'", action, namespace);

                return child.authorize(viewer, &rest, entity, value);
            }
        }

        let concern = action::concern_name(action);

        if let Some(decision) = self.concerns.get(concern) {
            trace!("resolving '{}' with concern '{}'", action, concern);
            let request = AccessRequest {
                viewer,
                action,
                entity,
                value,
            };

            return decision(&request);
        }

        debug!("no concern or nested policy matches '{}'; denying", action);
        Ok(false)
    }
}

impl<S, R, V> Default for Policy<S, R, V> {
    fn default() -> Self {
        Self::new()
    }
}
