//! Domain types for the todo list.
//!
//! A todo list is an ordered sequence of todo items. Items are appended at
//! the tail, toggled between done and not done, and removed. Identifiers are
//! positive, pairwise distinct, and assigned as one more than the largest
//! identifier currently in the list.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;
use todo_context_macros::Action;

/// Unique identifier for a todo item
///
/// Always positive. Serializes as a plain integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(NonZeroU64);

impl TodoId {
    /// The identifier given to the first todo of an empty list
    pub const FIRST: Self = Self(NonZeroU64::MIN);

    /// Creates a `TodoId`, or `None` for zero
    #[must_use]
    pub const fn new(id: u64) -> Option<Self> {
        match NonZeroU64::new(id) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    /// Returns the raw integer
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }

    /// The identifier after this one, or `None` once `u64::MAX` is reached
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }
}

impl From<NonZeroU64> for TodoId {
    fn from(id: NonZeroU64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier
    pub id: TodoId,
    /// What needs doing
    pub text: String,
    /// Whether the todo is done
    pub done: bool,
}

impl Todo {
    /// Creates a todo that is not done yet
    #[must_use]
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            done: false,
        }
    }

    /// Same todo, marked done
    #[must_use]
    pub const fn completed(mut self) -> Self {
        self.done = true;
        self
    }

    /// Flips `done`
    pub const fn toggle(&mut self) {
        self.done = !self.done;
    }
}

/// State of the todo list
///
/// Order is insertion order. Serializes as a bare JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodosState {
    /// All todos, oldest first
    pub todos: Vec<Todo>,
}

impl TodosState {
    /// Creates an empty todo list
    #[must_use]
    pub const fn new() -> Self {
        Self { todos: Vec::new() }
    }

    /// The list a provider starts with by default
    #[must_use]
    pub fn seeded() -> Self {
        Self::from(crate::config::TodosConfig::default().seed)
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Returns true if there are no todos
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns the number of done todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.done).count()
    }

    /// Returns a todo by ID
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Checks if a todo exists
    #[must_use]
    pub fn exists(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Iterates todos in order
    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.todos.iter()
    }

    /// The identifier the next created todo receives
    ///
    /// One more than the largest identifier present, or [`TodoId::FIRST`]
    /// for an empty list. `None` when the largest identifier is `u64::MAX`.
    #[must_use]
    pub fn next_id(&self) -> Option<TodoId> {
        match self.todos.iter().map(|t| t.id).max() {
            Some(max) => max.next(),
            None => Some(TodoId::FIRST),
        }
    }
}

impl From<Vec<Todo>> for TodosState {
    fn from(todos: Vec<Todo>) -> Self {
        Self { todos }
    }
}

impl<'a> IntoIterator for &'a TodosState {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Requests to change the todo list
///
/// Untyped form: `{"type": "CREATE", "text": ...}`,
/// `{"type": "TOGGLE", "id": ...}`, `{"type": "REMOVE", "id": ...}`.
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodosAction {
    /// Append a new todo that is not done
    Create {
        /// What needs doing
        text: String,
    },

    /// Flip `done` on the matching todo
    Toggle {
        /// Todo to toggle
        id: TodoId,
    },

    /// Drop the matching todo
    Remove {
        /// Todo to remove
        id: TodoId,
    },
}
