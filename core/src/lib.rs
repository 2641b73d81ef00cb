//! # Todo Context Core
//!
//! Core traits and types for the todo context store.
//!
//! This crate provides the abstractions a UI-facing state container is built
//! from: a pure reducer, effect descriptions returned by that reducer, and a
//! small `Action` trait that names action kinds.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state owned by a store
//! - **Action**: Every request to change that state
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Follow-up work described as a value, run by the runtime
//! - **Environment**: Injected dependencies
//!
//! ## Example
//!
//! ```
//! use todo_context_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CounterState,
//!         action: CounterAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<CounterAction>; 4]> {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let mut state = CounterState::default();
//! CounterReducer.reduce(&mut state, CounterAction::Increment, &());
//! assert_eq!(state.count, 1);
//! ```

// Re-export commonly used types
pub use smallvec::{smallvec, SmallVec};

/// Action module - naming the kinds of input a reducer accepts
///
/// Actions arriving from outside the type system (JSON from a UI layer) are
/// tagged with a kind string. The `Action` trait exposes the full set of
/// recognized kinds so a decoder can reject anything else before it reaches
/// a reducer.
pub mod action {
    /// Kind metadata for action enums
    ///
    /// Usually implemented with `#[derive(Action)]` from the macros crate.
    ///
    /// # Example
    ///
    /// ```
    /// use todo_context_core::action::Action;
    ///
    /// enum LampAction {
    ///     On,
    ///     Off,
    /// }
    ///
    /// impl Action for LampAction {
    ///     const KINDS: &'static [&'static str] = &["ON", "OFF"];
    ///
    ///     fn kind(&self) -> &'static str {
    ///         match self {
    ///             Self::On => "ON",
    ///             Self::Off => "OFF",
    ///         }
    ///     }
    /// }
    ///
    /// assert!(LampAction::is_known_kind("ON"));
    /// assert!(!LampAction::is_known_kind("DIM"));
    /// ```
    pub trait Action {
        /// Every kind name this action type recognizes
        const KINDS: &'static [&'static str];

        /// The kind name of this particular action
        fn kind(&self) -> &'static str;

        /// Returns true if `kind` names one of the recognized variants
        #[must_use]
        fn is_known_kind(kind: &str) -> bool {
            Self::KINDS.contains(&kind)
        }
    }
}

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Updates state in place
        /// 2. Returns effect descriptions to be executed
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Returns
        ///
        /// Effects for the runtime to execute after the state change
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe follow-up work to be performed by the runtime.
/// They are values, not execution.
pub mod effect {
    /// Effect type - describes follow-up work for the store
    ///
    /// Effects are NOT executed immediately. They are returned from reducers
    /// and executed by the Store once the state write has been released.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Feed an action back into the same store
        ///
        /// Queued actions run in FIFO order after the current one.
        Send(Box<Action>),
    }

    impl<Action> Effect<Action> {
        /// Wrap an action as a feedback effect
        #[must_use]
        pub fn send(action: Action) -> Self {
            Self::Send(Box::new(action))
        }

        /// Returns true for `Effect::None`
        #[must_use]
        pub const fn is_none(&self) -> bool {
            matches!(self, Self::None)
        }
    }
}
