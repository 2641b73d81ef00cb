//! Command-line walkthrough of the todo store.
//!
//! Builds a provider, renders the list, and dispatches a few actions the way
//! UI components would, including one the store does not recognize.

use serde_json::json;
use todos::{
    use_todos_dispatch, use_todos_state, StoreError, TodoId, TodosAction, TodosProvider,
    TodosScope,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn render(scope: &TodosScope) -> Result<(), StoreError> {
    let todos = use_todos_state(scope)?;
    for todo in &todos {
        let status = if todo.done { "✓" } else { " " };
        println!("  [{status}] #{} {}", todo.id, todo.text);
    }
    println!("  {}/{} done", todos.completed_count(), todos.count());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todos=debug,todo_context_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Todo Store ===\n");

    let provider = TodosProvider::new();
    let scope = provider.scope();
    let dispatch = use_todos_dispatch(&scope)?;

    println!("Seeded todos:");
    render(&scope)?;

    println!("\n>>> CREATE \"Write the release notes\"");
    dispatch.dispatch(TodosAction::Create {
        text: "Write the release notes".to_string(),
    })?;
    render(&scope)?;

    let third = TodoId::new(3).ok_or("todo id must be positive")?;
    println!("\n>>> TOGGLE #{third}");
    dispatch.dispatch(TodosAction::Toggle { id: third })?;
    render(&scope)?;

    println!("\n>>> REMOVE #2 (untyped)");
    dispatch.dispatch_value(&json!({"type": "REMOVE", "id": 2}))?;
    render(&scope)?;

    println!("\n>>> RENAME #1 (untyped)");
    match dispatch.dispatch_value(&json!({"type": "RENAME", "id": 1, "text": "?"})) {
        Ok(()) => println!("  unexpectedly accepted"),
        Err(err) => println!("  rejected: {err}"),
    }

    println!("\n>>> Reading from a scope without a provider");
    if let Err(err) = use_todos_state(&TodosScope::detached()) {
        println!("  rejected: {err}");
    }

    println!("\nFinal todos:");
    render(&scope)?;

    println!("\n=== Demo Complete ===");
    Ok(())
}
