//! # Todo Context Runtime
//!
//! Runtime implementation for the todo context store.
//!
//! This crate provides the Store that coordinates reducer execution, the
//! dispatcher handle UI components hold on to, and the context type that
//! carries a provided store into consumers.
//!
//! ## Core Components
//!
//! - **Store**: Owns state, runs the reducer, processes feedback effects
//! - **Dispatcher**: Cloneable handle that sends actions into a store
//! - **Context**: A named value that may or may not have been provided
//! - **Decoding**: Turns untyped `{"type": ...}` JSON into typed actions
//!
//! ## Example
//!
//! ```ignore
//! use todo_context_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething)?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field)?;
//! ```

use std::collections::VecDeque;
use std::marker::PhantomData;
use std::sync::{Arc, RwLock};
use todo_context_core::{action::Action, effect::Effect, reducer::Reducer};

/// Provider scopes for distributing a store to consumers
pub mod context;

/// Decoding of untyped actions
pub mod decode;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// An accessor was used on a scope with no provider
        ///
        /// Consumers must receive a scope built by the provider that owns
        /// the store.
        #[error("{context} provider not found")]
        MissingProvider {
            /// Name of the context that was looked up
            context: &'static str,
        },

        /// An action of an unrecognized kind was dispatched
        ///
        /// The state is left untouched.
        #[error("Unhandled action: {kind}")]
        UnhandledAction {
            /// The kind tag that was received
            kind: String,
        },

        /// An untyped action could not be decoded
        ///
        /// Either the kind tag is missing or the payload does not fit the kind.
        #[error("Malformed action: {0}")]
        MalformedAction(String),

        /// The state lock was poisoned by a panicking reducer
        #[error("Store state lock poisoned")]
        Poisoned,
    }
}

/// Dispatcher handle
pub mod dispatcher {
    use super::{decode, Action, Arc, StoreError};
    use serde::de::DeserializeOwned;

    type SendFn<A> = dyn Fn(A) -> Result<(), StoreError> + Send + Sync;

    /// A cloneable handle that applies actions to a store
    ///
    /// Every clone feeds the same store. Obtained from
    /// [`Store::dispatcher`](crate::Store::dispatcher).
    pub struct Dispatcher<A> {
        send: Arc<SendFn<A>>,
    }

    impl<A> Dispatcher<A> {
        /// Build a dispatcher from any send function
        pub fn new<F>(send: F) -> Self
        where
            F: Fn(A) -> Result<(), StoreError> + Send + Sync + 'static,
        {
            Self {
                send: Arc::new(send),
            }
        }

        /// Apply an action, replacing the stored state
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::Poisoned`] if the state lock is poisoned.
        pub fn dispatch(&self, action: A) -> Result<(), StoreError> {
            (self.send)(action)
        }

        /// Decode an untyped action and apply it
        ///
        /// # Errors
        ///
        /// - [`StoreError::UnhandledAction`]: the `type` tag is not a known kind
        /// - [`StoreError::MalformedAction`]: the tag is missing or the payload is invalid
        ///
        /// In both cases the state is not touched.
        pub fn dispatch_value(&self, value: &serde_json::Value) -> Result<(), StoreError>
        where
            A: Action + DeserializeOwned,
        {
            let action = decode::decode_action(value)?;
            self.dispatch(action)
        }
    }

    impl<A> Clone for Dispatcher<A> {
        fn clone(&self) -> Self {
            Self {
                send: Arc::clone(&self.send),
            }
        }
    }

    impl<A> std::fmt::Debug for Dispatcher<A> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Dispatcher").finish_non_exhaustive()
        }
    }
}

/// Store module
pub mod store {
    use super::{Action, Arc, Dispatcher, Effect, PhantomData, Reducer, RwLock, StoreError, VecDeque};

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`, written only by `send`)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Feedback effects (queued and reduced in order)
    ///
    /// Cloning a Store yields another handle to the same state.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: Arc<R>,
        environment: Arc<E>,
        _action: PhantomData<fn(A)>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        A: Action,
    {
        /// Create a new store with initial state, reducer, and environment
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer: Arc::new(reducer),
                environment: Arc::new(environment),
                _action: PhantomData,
            }
        }

        /// Send an action through the reducer
        ///
        /// The action is reduced under the write lock. Any `Effect::Send`
        /// actions it produces are reduced afterwards, in order, before this
        /// call returns.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::Poisoned`] if a previous reducer call panicked.
        #[tracing::instrument(skip(self, action), name = "store_send", fields(kind = action.kind()))]
        pub fn send(&self, action: A) -> Result<(), StoreError> {
            let mut queue = VecDeque::from([action]);

            while let Some(action) = queue.pop_front() {
                let kind = action.kind();
                let effects = {
                    let mut state = self.state.write().map_err(|_| StoreError::Poisoned)?;
                    self.reducer.reduce(&mut *state, action, &self.environment)
                };

                tracing::debug!(kind, effects = effects.len(), "Action reduced");

                for effect in effects {
                    match effect {
                        Effect::None => {},
                        Effect::Send(next) => queue.push_back(*next),
                    }
                }
            }

            Ok(())
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let count = store.state(|s| s.todos.len())?;
        /// ```
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::Poisoned`] if a previous reducer call panicked.
        pub fn state<F, T>(&self, f: F) -> Result<T, StoreError>
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().map_err(|_| StoreError::Poisoned)?;
            Ok(f(&*state))
        }

        /// Clone the current state out of the store
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::Poisoned`] if a previous reducer call panicked.
        pub fn snapshot(&self) -> Result<S, StoreError>
        where
            S: Clone,
        {
            self.state(S::clone)
        }

        /// Returns a dispatcher bound to this store
        #[must_use]
        pub fn dispatcher(&self) -> Dispatcher<A>
        where
            S: Send + Sync + 'static,
            A: 'static,
            E: Send + Sync + 'static,
            R: Send + Sync + 'static,
        {
            let store = self.clone();
            Dispatcher::new(move |action| store.send(action))
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: Arc::clone(&self.reducer),
                environment: Arc::clone(&self.environment),
                _action: PhantomData,
            }
        }
    }

    impl<S, A, E, R> std::fmt::Debug for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Store")
                .field("handles", &Arc::strong_count(&self.state))
                .finish_non_exhaustive()
        }
    }
}

pub use context::Context;
pub use decode::{decode_action, decode_action_str};
pub use dispatcher::Dispatcher;
pub use error::StoreError;
pub use store::Store;
