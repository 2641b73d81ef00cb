//! The todo store provider and its accessors.
//!
//! A [`TodosProvider`] owns the single store of a UI subtree. It hands out
//! [`TodosScope`]s, which consumers receive explicitly and pass to
//! [`use_todos_state`] and [`use_todos_dispatch`]. A scope that did not come
//! from a provider makes both accessors fail with
//! [`StoreError::MissingProvider`].

use crate::config::{ConfigError, TodosConfig};
use crate::reducer::TodosReducer;
use crate::types::{TodosAction, TodosState};
use todo_context_runtime::{Context, Dispatcher, Store, StoreError};

/// Store holding the todo list
pub type TodosStore = Store<TodosState, TodosAction, (), TodosReducer>;

/// Dispatcher handed to components that change the todo list
pub type TodosDispatch = Dispatcher<TodosAction>;

/// Name of the state context, as reported by `MissingProvider`
pub const STATE_CONTEXT: &str = "TodosState";

/// Name of the dispatch context, as reported by `MissingProvider`
pub const DISPATCH_CONTEXT: &str = "TodosDispatch";

/// Owner of the todo store for one UI subtree
///
/// Dropping the provider together with every scope cloned from it drops
/// the list.
#[derive(Debug)]
pub struct TodosProvider {
    store: TodosStore,
}

impl TodosProvider {
    /// Creates a provider seeded with the default todos
    #[must_use]
    pub fn new() -> Self {
        Self::from_state(TodosState::seeded())
    }

    /// Creates a provider from a configuration
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateId`] if the seed repeats an identifier.
    pub fn with_config(config: TodosConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_state(config.into_state()))
    }

    fn from_state(state: TodosState) -> Self {
        tracing::debug!(count = state.count(), "Todos provider created");
        Self {
            store: Store::new(state, TodosReducer::new(), ()),
        }
    }

    /// A scope carrying this provider's state and dispatch contexts
    #[must_use]
    pub fn scope(&self) -> TodosScope {
        TodosScope {
            state: Context::provided(STATE_CONTEXT, self.store.clone()),
            dispatch: Context::provided(DISPATCH_CONTEXT, self.store.dispatcher()),
        }
    }

    /// The underlying store
    #[must_use]
    pub const fn store(&self) -> &TodosStore {
        &self.store
    }
}

impl Default for TodosProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// What a component receives from its provider
///
/// State and dispatch travel in separate contexts so a component that only
/// dispatches never needs the list.
#[derive(Clone, Debug)]
pub struct TodosScope {
    state: Context<TodosStore>,
    dispatch: Context<TodosDispatch>,
}

impl TodosScope {
    /// A scope with no provider behind it
    #[must_use]
    pub const fn detached() -> Self {
        Self {
            state: Context::missing(STATE_CONTEXT),
            dispatch: Context::missing(DISPATCH_CONTEXT),
        }
    }

    /// Returns true if a provider built this scope
    #[must_use]
    pub const fn is_provided(&self) -> bool {
        self.state.is_provided() && self.dispatch.is_provided()
    }
}

/// Read the current todo list
///
/// # Errors
///
/// - [`StoreError::MissingProvider`]: `scope` has no provider
/// - [`StoreError::Poisoned`]: a reducer panicked earlier
pub fn use_todos_state(scope: &TodosScope) -> Result<TodosState, StoreError> {
    scope.state.get()?.snapshot()
}

/// Get the dispatcher for the todo list
///
/// # Errors
///
/// Returns [`StoreError::MissingProvider`] if `scope` has no provider.
pub fn use_todos_dispatch(scope: &TodosScope) -> Result<TodosDispatch, StoreError> {
    scope.dispatch.get().cloned()
}
