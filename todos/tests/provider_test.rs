//! Integration tests for the todo provider
//!
//! These tests go through the same path a UI component does: a provider
//! hands out scopes, components read and dispatch through them.

use serde_json::json;
use todo_context_testing::init_test_tracing;
use todos::{
    use_todos_dispatch, use_todos_state, ConfigError, StoreError, Todo, TodoId, TodosAction,
    TodosConfig, TodosProvider, TodosScope, TodosState,
};

fn id(n: u64) -> TodoId {
    TodoId::new(n).unwrap()
}

fn abc_provider() -> TodosProvider {
    init_test_tracing();
    TodosProvider::with_config(TodosConfig::empty().with_seed(vec![
        Todo::new(id(1), "a").completed(),
        Todo::new(id(2), "b").completed(),
        Todo::new(id(3), "c"),
    ]))
    .unwrap()
}

#[test]
fn test_default_provider_is_seeded() {
    init_test_tracing();
    let provider = TodosProvider::default();
    let todos = use_todos_state(&provider.scope()).unwrap();

    let texts: Vec<&str> = todos.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "Learn the Context API",
            "Learn TypeScript",
            "Use TypeScript together with the Context API",
        ]
    );
    assert_eq!(todos.completed_count(), 2);
}

#[test]
fn test_scenario_create_toggle_remove() {
    let provider = abc_provider();
    let scope = provider.scope();
    let dispatch = use_todos_dispatch(&scope).unwrap();

    dispatch
        .dispatch(TodosAction::Create {
            text: "d".to_string(),
        })
        .unwrap();
    dispatch.dispatch(TodosAction::Toggle { id: id(3) }).unwrap();
    dispatch.dispatch(TodosAction::Remove { id: id(2) }).unwrap();

    assert_eq!(
        use_todos_state(&scope).unwrap(),
        TodosState::from(vec![
            Todo::new(id(1), "a").completed(),
            Todo::new(id(3), "c").completed(),
            Todo::new(id(4), "d"),
        ])
    );
}

#[test]
fn test_untyped_actions() {
    let provider = abc_provider();
    let scope = provider.scope();
    let dispatch = use_todos_dispatch(&scope).unwrap();

    dispatch
        .dispatch_value(&json!({"type": "CREATE", "text": "d"}))
        .unwrap();
    dispatch
        .dispatch_value(&json!({"type": "TOGGLE", "id": 4}))
        .unwrap();

    let todos = use_todos_state(&scope).unwrap();
    assert_eq!(todos.get(id(4)), Some(&Todo::new(id(4), "d").completed()));
}

#[test]
fn test_unhandled_action_leaves_state_unchanged() {
    let provider = abc_provider();
    let scope = provider.scope();
    let dispatch = use_todos_dispatch(&scope).unwrap();
    let before = use_todos_state(&scope).unwrap();

    let result = dispatch.dispatch_value(&json!({"type": "RENAME", "id": 1, "text": "z"}));

    assert_eq!(
        result,
        Err(StoreError::UnhandledAction {
            kind: "RENAME".to_string()
        })
    );
    assert_eq!(use_todos_state(&scope).unwrap(), before);
}

#[test]
fn test_malformed_action_leaves_state_unchanged() {
    let provider = abc_provider();
    let scope = provider.scope();
    let dispatch = use_todos_dispatch(&scope).unwrap();
    let before = use_todos_state(&scope).unwrap();

    let zero_id = dispatch.dispatch_value(&json!({"type": "REMOVE", "id": 0}));
    let no_tag = dispatch.dispatch_value(&json!({"text": "untagged"}));

    assert!(matches!(zero_id, Err(StoreError::MalformedAction(_))));
    assert!(matches!(no_tag, Err(StoreError::MalformedAction(_))));
    assert_eq!(use_todos_state(&scope).unwrap(), before);
}

#[test]
fn test_missing_provider() {
    init_test_tracing();
    let scope = TodosScope::detached();

    assert!(matches!(
        use_todos_state(&scope),
        Err(StoreError::MissingProvider { .. })
    ));
    assert!(matches!(
        use_todos_dispatch(&scope),
        Err(StoreError::MissingProvider { .. })
    ));
}

#[test]
fn test_scopes_share_one_store() {
    let provider = abc_provider();
    let writer = provider.scope();
    let reader = provider.scope();

    use_todos_dispatch(&writer)
        .unwrap()
        .dispatch(TodosAction::Remove { id: id(1) })
        .unwrap();

    assert_eq!(use_todos_state(&reader).unwrap().count(), 2);
    assert_eq!(use_todos_state(&writer.clone()).unwrap().count(), 2);
}

#[test]
fn test_providers_are_isolated() {
    let first = abc_provider();
    let second = abc_provider();

    use_todos_dispatch(&first.scope())
        .unwrap()
        .dispatch(TodosAction::Remove { id: id(1) })
        .unwrap();

    assert_eq!(use_todos_state(&first.scope()).unwrap().count(), 2);
    assert_eq!(use_todos_state(&second.scope()).unwrap().count(), 3);
}

#[test]
fn test_empty_provider_assigns_first_id() {
    init_test_tracing();
    let provider = TodosProvider::with_config(TodosConfig::empty()).unwrap();
    let scope = provider.scope();

    use_todos_dispatch(&scope)
        .unwrap()
        .dispatch(TodosAction::Create {
            text: "first".to_string(),
        })
        .unwrap();

    let todos = use_todos_state(&scope).unwrap();
    assert_eq!(todos.todos, vec![Todo::new(TodoId::FIRST, "first")]);
}

#[test]
fn test_duplicate_seed_rejected() {
    init_test_tracing();
    let config = TodosConfig::empty().with_seed(vec![Todo::new(id(5), "x"), Todo::new(id(5), "y")]);

    assert_eq!(
        TodosProvider::with_config(config).err().map(|e| e.to_string()),
        Some(ConfigError::DuplicateId(id(5)).to_string())
    );
}
