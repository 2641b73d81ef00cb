//! # Todo Context Testing
//!
//! Testing utilities and helpers for the todo context store.
//!
//! This crate provides:
//! - `ReducerTest`, a Given-When-Then builder for reducers
//! - Assertion helpers for the effects a reducer returns
//! - A tracing subscriber suitable for test output
//!
//! ## Example
//!
//! ```ignore
//! use todo_context_testing::{assertions, ReducerTest};
//!
//! ReducerTest::new(TodosReducer::new())
//!     .with_env(())
//!     .given_state(TodosState::seeded())
//!     .when_action(TodosAction::Remove { id })
//!     .then_state(|state| assert_eq!(state.count(), 2))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```


pub use reducer_test::{assertions, ReducerTest};

use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a `tracing` subscriber that writes through the test harness
///
/// Safe to call from every test; only the first call installs anything.
/// Honors `RUST_LOG`, defaulting to `debug`.
pub fn init_test_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "debug".into()),
            )
            .with_test_writer()
            .try_init();
    });
}
