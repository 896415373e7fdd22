//! Action-string parsing.
//!
//! An action is a colon-delimited string such as `"user:posts:read"`. All
//! tokens but the last denote a namespace path through nested policies;
//! the last token names a concern within the final policy. The functions
//! here are deliberately mechanical: there is no validation layer, and
//! malformed inputs (empty strings, trailing colons) yield whatever the
//! splitting rules produce.

use std::borrow::Cow;

/// Extract the namespace to delegate to, if any.
///
/// A single leading colon is ignored, so `":read"` and `"read"` both
/// address the current policy. If the remainder holds more than one token,
/// the first token is the namespace; otherwise there is none.
///
/// # Arguments
///
/// * `action` - The action string to split.
///
/// # Returns
///
/// The namespace name, or `""` when the action addresses the current
/// policy directly.
pub fn policy_name(action: &str) -> &str {
    let trimmed = action.strip_prefix(':').unwrap_or(action);

    match trimmed.split_once(':') {
        Some((name, _)) => name,
        None => "",
    }
}

/// Reduce an action by one namespace segment for delegation.
///
/// Everything up to and including the first colon is dropped. A remainder
/// without any colon is a bare concern name and gets a leading colon, so
/// the nested policy cannot mistake it for a namespace.
///
/// # Arguments
///
/// * `action` - The action string to reduce.
///
/// # Returns
///
/// The sub-action to forward to the nested policy.
pub fn sub_action(action: &str) -> Cow<'_, str> {
    let rest = match action.split_once(':') {
        Some((_, rest)) => rest,
        None => action,
    };

    if rest.contains(':') {
        Cow::Borrowed(rest)
    } else {
        Cow::Owned(format!(":{}", rest))
    }
}

/// Extract the concern name: the token after the last colon.
///
/// This is computed on the whole action string, independent of the
/// namespace split. Concerns are matched by their final segment at every
/// nesting depth, so `"a:b:c"` looks up `"c"` even when no nested policy
/// `"a"` exists.
pub fn concern_name(action: &str) -> &str {
    match action.rsplit_once(':') {
        Some((_, name)) => name,
        None => action,
    }
}
