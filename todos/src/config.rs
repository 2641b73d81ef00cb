//! Provider configuration.
//!
//! A provider starts from a seed list. The default seed is the three todos
//! every fresh provider shows; tests and embedders can start from any other
//! list, as long as its identifiers are distinct.

use crate::types::{Todo, TodoId, TodosState};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised while validating a [`TodosConfig`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Two seed todos share an identifier
    #[error("Duplicate todo id {0} in seed")]
    DuplicateId(TodoId),
}

/// Configuration for a [`TodosProvider`](crate::TodosProvider)
///
/// # Example
///
/// ```
/// use todos::{Todo, TodoId, TodosConfig};
///
/// let config = TodosConfig::empty()
///     .with_todo(Todo::new(TodoId::FIRST, "Water the plants"));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodosConfig {
    /// Todos present when the provider is created
    pub seed: Vec<Todo>,
}

impl TodosConfig {
    /// A configuration with no seed todos
    #[must_use]
    pub const fn empty() -> Self {
        Self { seed: Vec::new() }
    }

    /// Replace the seed list
    #[must_use]
    pub fn with_seed(mut self, seed: Vec<Todo>) -> Self {
        self.seed = seed;
        self
    }

    /// Append one todo to the seed list
    #[must_use]
    pub fn with_todo(mut self, todo: Todo) -> Self {
        self.seed.push(todo);
        self
    }

    /// Check that seed identifiers are pairwise distinct
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateId`] naming the first repeated identifier.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::with_capacity(self.seed.len());
        for todo in &self.seed {
            if !seen.insert(todo.id) {
                return Err(ConfigError::DuplicateId(todo.id));
            }
        }
        Ok(())
    }

    /// The initial state this configuration describes
    #[must_use]
    pub fn into_state(self) -> TodosState {
        TodosState::from(self.seed)
    }
}

impl Default for TodosConfig {
    fn default() -> Self {
        let seed = [
            ("Learn the Context API", true),
            ("Learn TypeScript", true),
            ("Use TypeScript together with the Context API", false),
        ]
        .into_iter()
        .zip(std::iter::successors(Some(TodoId::FIRST), |id| id.next()))
        .map(|((text, done), id)| Todo {
            id,
            text: text.to_string(),
            done,
        })
        .collect();

        Self { seed }
    }
}
