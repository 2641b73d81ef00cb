//! Reducer logic for the todo list.
//!
//! Three transitions, all total: creating appends, toggling and removing
//! leave the list unchanged when no todo matches.

use crate::types::{Todo, TodoId, TodosAction, TodosState};
use todo_context_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};

/// Reducer for the todo list
#[derive(Clone, Copy, Debug, Default)]
pub struct TodosReducer;

impl TodosReducer {
    /// Creates a new `TodosReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Appends a todo with the next free identifier
    fn create(state: &mut TodosState, text: String) {
        let Some(id) = state.next_id() else {
            tracing::warn!(count = state.count(), "Todo identifiers exhausted, create ignored");
            return;
        };

        tracing::debug!(%id, "Todo created");
        state.todos.push(Todo::new(id, text));
    }

    /// Flips `done` on the matching todo
    fn toggle(state: &mut TodosState, id: TodoId) {
        match state.todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.toggle();
                tracing::debug!(%id, done = todo.done, "Todo toggled");
            },
            None => tracing::debug!(%id, "Toggle matched no todo"),
        }
    }

    /// Drops the matching todo
    fn remove(state: &mut TodosState, id: TodoId) {
        let before = state.count();
        state.todos.retain(|t| t.id != id);

        if state.count() == before {
            tracing::debug!(%id, "Remove matched no todo");
        } else {
            tracing::debug!(%id, "Todo removed");
        }
    }
}

impl Reducer for TodosReducer {
    type State = TodosState;
    type Action = TodosAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodosAction::Create { text } => Self::create(state, text),
            TodosAction::Toggle { id } => Self::toggle(state, id),
            TodosAction::Remove { id } => Self::remove(state, id),
        }

        // Pure state machine - no follow-up work
        smallvec![Effect::None]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_context_testing::{assertions, ReducerTest};

    fn id(n: u64) -> TodoId {
        TodoId::new(n).unwrap()
    }

    /// [{1,"a",true},{2,"b",true},{3,"c",false}]
    fn abc() -> TodosState {
        TodosState::from(vec![
            Todo::new(id(1), "a").completed(),
            Todo::new(id(2), "b").completed(),
            Todo::new(id(3), "c"),
        ])
    }

    #[test]
    fn test_create_appends_next_id() {
        ReducerTest::new(TodosReducer::new())
            .with_env(())
            .given_state(abc())
            .when_action(TodosAction::Create {
                text: "d".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.count(), 4);
                assert_eq!(state.todos[..3], abc().todos[..]);
                assert_eq!(state.todos[3], Todo::new(id(4), "d"));
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_toggle_flips_only_match() {
        let mut expected = abc();
        expected.todos[2].done = true;

        ReducerTest::new(TodosReducer::new())
            .with_env(())
            .given_state(abc())
            .when_action(TodosAction::Toggle { id: id(3) })
            .then_state_eq(expected)
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_remove_keeps_order() {
        ReducerTest::new(TodosReducer::new())
            .with_env(())
            .given_state(abc())
            .when_action(TodosAction::Remove { id: id(2) })
            .then_state_eq(TodosState::from(vec![
                Todo::new(id(1), "a").completed(),
                Todo::new(id(3), "c"),
            ]))
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_toggle_missing_id_is_noop() {
        ReducerTest::new(TodosReducer::new())
            .with_env(())
            .given_state(abc())
            .when_action(TodosAction::Toggle { id: id(42) })
            .then_state_eq(abc())
            .run();
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        ReducerTest::new(TodosReducer::new())
            .with_env(())
            .given_state(abc())
            .when_action(TodosAction::Remove { id: id(42) })
            .then_state_eq(abc())
            .run();
    }

    #[test]
    fn test_create_on_empty_list_starts_at_one() {
        ReducerTest::new(TodosReducer::new())
            .with_env(())
            .given_state(TodosState::new())
            .when_action(TodosAction::Create {
                text: "first".to_string(),
            })
            .then_state_eq(TodosState::from(vec![Todo::new(TodoId::FIRST, "first")]))
            .run();
    }

    #[test]
    fn test_create_after_removing_everything() {
        ReducerTest::new(TodosReducer::new())
            .with_env(())
            .given_state(TodosState::from(vec![Todo::new(id(8), "only")]))
            .when_action(TodosAction::Remove { id: id(8) })
            .when_action(TodosAction::Create {
                text: "again".to_string(),
            })
            .then_state_eq(TodosState::from(vec![Todo::new(TodoId::FIRST, "again")]))
            .run();
    }

    #[test]
    fn test_create_with_exhausted_ids_is_ignored() {
        let full = TodosState::from(vec![Todo::new(id(u64::MAX), "last")]);

        ReducerTest::new(TodosReducer::new())
            .with_env(())
            .given_state(full.clone())
            .when_action(TodosAction::Create {
                text: "overflow".to_string(),
            })
            .then_state_eq(full)
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        ReducerTest::new(TodosReducer::new())
            .with_env(())
            .given_state(abc())
            .when_action(TodosAction::Toggle { id: id(1) })
            .when_action(TodosAction::Toggle { id: id(1) })
            .then_state_eq(abc())
            .run();
    }
}
