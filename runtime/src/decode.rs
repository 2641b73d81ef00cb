//! Decoding of untyped actions.
//!
//! UI layers often produce actions as JSON objects tagged with a `type`
//! field. Decoding checks that tag against [`Action::KINDS`] before
//! deserializing, so an unknown kind surfaces as
//! [`StoreError::UnhandledAction`] rather than a generic parse failure.

use crate::StoreError;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use todo_context_core::action::Action;

/// Field that carries the action kind
pub const ACTION_TAG: &str = "type";

/// Decode a `{"type": KIND, ...}` value into a typed action
///
/// # Errors
///
/// - [`StoreError::MalformedAction`]: no string `type` field, or the payload
///   does not deserialize into the variant named by the tag
/// - [`StoreError::UnhandledAction`]: the tag is not one of `A::KINDS`
pub fn decode_action<A>(value: &Value) -> Result<A, StoreError>
where
    A: Action + DeserializeOwned,
{
    let kind = value
        .get(ACTION_TAG)
        .and_then(Value::as_str)
        .ok_or_else(|| StoreError::MalformedAction(format!("missing string `{ACTION_TAG}` field")))?;

    if !A::is_known_kind(kind) {
        tracing::warn!(kind, "Unhandled action");
        return Err(StoreError::UnhandledAction {
            kind: kind.to_string(),
        });
    }

    A::deserialize(value).map_err(|e| {
        tracing::warn!(kind, error = %e, "Malformed action payload");
        StoreError::MalformedAction(e.to_string())
    })
}

/// Decode an action from JSON text
///
/// # Errors
///
/// Same as [`decode_action`], plus [`StoreError::MalformedAction`] for text
/// that is not valid JSON.
pub fn decode_action_str<A>(json: &str) -> Result<A, StoreError>
where
    A: Action + DeserializeOwned,
{
    let value: Value =
        serde_json::from_str(json).map_err(|e| StoreError::MalformedAction(e.to_string()))?;
    decode_action(&value)
}
