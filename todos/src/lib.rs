//! Todo list state container.
//!
//! A single store per UI subtree holds an ordered list of todos. Components
//! receive a [`TodosScope`] from the [`TodosProvider`] and use two accessors:
//!
//! - [`use_todos_state`] - the current list
//! - [`use_todos_dispatch`] - a handle that applies [`TodosAction`]s
//!
//! Either accessor fails with `StoreError::MissingProvider` on a scope that
//! no provider built. Untyped actions dispatched with
//! [`TodosDispatch::dispatch_value`](todo_context_runtime::Dispatcher::dispatch_value)
//! fail with `StoreError::UnhandledAction` when their kind is not one of
//! `CREATE`, `TOGGLE`, `REMOVE`.
//!
//! # Quick Start
//!
//! ```
//! use todos::{use_todos_dispatch, use_todos_state, TodoId, TodosAction, TodosProvider};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = TodosProvider::new();
//! let scope = provider.scope();
//!
//! let dispatch = use_todos_dispatch(&scope)?;
//! dispatch.dispatch(TodosAction::Create {
//!     text: "Buy milk".to_string(),
//! })?;
//! dispatch.dispatch(TodosAction::Toggle { id: TodoId::FIRST })?;
//!
//! let todos = use_todos_state(&scope)?;
//! assert_eq!(todos.count(), 4);
//! assert_eq!(todos.completed_count(), 1);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod provider;
pub mod reducer;
pub mod types;

// Re-export commonly used types
pub use config::{ConfigError, TodosConfig};
pub use provider::{
    use_todos_dispatch, use_todos_state, TodosDispatch, TodosProvider, TodosScope, TodosStore,
};
pub use reducer::TodosReducer;
pub use todo_context_runtime::StoreError;
pub use types::{Todo, TodoId, TodosAction, TodosState};
