//! Access request data types.
//!
//! This module defines the record handed to decision functions when the
//! policy engine resolves an action to a concern.

/// A request to perform an action on an entity.
///
/// The engine never inspects the viewer, entity or value payloads; it only
/// forwards them to the decision function that resolves the action. They
/// are therefore plain generic parameters rather than concrete types.
///
/// `action` is the action string as seen by the node that resolved the
/// concern. When the request was routed through nested policies, this is
/// the reduced sub-action (e.g. `":read"`), not the original namespaced
/// string.
#[derive(Debug, Clone, Copy)]
pub struct AccessRequest<'a, S, R, V = ()> {
    /// The acting subject requesting permission.
    pub viewer: &'a S,

    /// The action string, as received by the resolving node.
    pub action: &'a str,

    /// The entity the action targets.
    pub entity: &'a R,

    /// Optional contextual data attached to the request.
    pub value: Option<&'a V>,
}
