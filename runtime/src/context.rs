//! Provider scopes for distributing a store to consumers.
//!
//! A [`Context`] is a named slot that either holds a value handed down by a
//! provider or holds nothing. Consumers receive contexts explicitly and call
//! [`Context::get`], which reports [`StoreError::MissingProvider`] when no
//! provider filled the slot.

use crate::StoreError;

/// A named value that may or may not have been provided
///
/// # Example
///
/// ```
/// use todo_context_runtime::{Context, StoreError};
///
/// let provided = Context::provided("Counter", 3);
/// assert_eq!(provided.get(), Ok(&3));
///
/// let missing: Context<i32> = Context::missing("Counter");
/// assert_eq!(
///     missing.get(),
///     Err(StoreError::MissingProvider { context: "Counter" })
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Context<T> {
    name: &'static str,
    value: Option<T>,
}

impl<T> Context<T> {
    /// A context no provider has filled
    #[must_use]
    pub const fn missing(name: &'static str) -> Self {
        Self { name, value: None }
    }

    /// A context filled with `value`
    #[must_use]
    pub const fn provided(name: &'static str, value: T) -> Self {
        Self {
            name,
            value: Some(value),
        }
    }

    /// Name used in `MissingProvider` errors
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns true if a provider filled this context
    #[must_use]
    pub const fn is_provided(&self) -> bool {
        self.value.is_some()
    }

    /// Look up the provided value
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingProvider`] if no provider filled this context.
    pub fn get(&self) -> Result<&T, StoreError> {
        self.value.as_ref().ok_or_else(|| {
            tracing::warn!(context = self.name, "Context read outside of its provider");
            StoreError::MissingProvider { context: self.name }
        })
    }
}
