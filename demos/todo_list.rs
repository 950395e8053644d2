//! Todo List
//!
//! This example demonstrates cursor factories, composite actions and the
//! change journal.
//!
//! Key concepts:
//! - A cursor factory picks the todo to toggle from the call params
//! - A composite action updates two parts of the state with one render
//! - The journal lists which cursors were written
//!
//! Run with: cargo run --example todo_list

use cursorflux::builder::assign;
use cursorflux::core::{Cursor, CursorSource, Handler};
use cursorflux::{cursor, ActionPair, Engine};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug)]
struct Todo {
    title: Arc<String>,
    done: Arc<bool>,
}

#[derive(Clone, Debug)]
struct TodoState {
    todos: Arc<Vec<Arc<Todo>>>,
    filter: Arc<String>,
    status: Arc<String>,
}

fn todo_at(index: usize) -> Cursor<TodoState, Todo> {
    cursor!(TodoState => todos).then(&Cursor::new(
        index.to_string(),
        move |todos: &Arc<Vec<Arc<Todo>>>| Arc::clone(&todos[index]),
        move |todos: &Arc<Vec<Arc<Todo>>>, todo| {
            let mut next = (**todos).clone();
            next[index] = todo;
            Arc::new(next)
        },
    ))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Todo List Example ===\n");

    let todos = ["write docs", "review queue", "ship"]
        .into_iter()
        .map(|title| {
            Arc::new(Todo {
                title: Arc::new(title.to_string()),
                done: Arc::new(false),
            })
        })
        .collect();

    let engine = Engine::builder()
        .initial(TodoState {
            todos: Arc::new(todos),
            filter: Arc::new("all".to_string()),
            status: Arc::new(String::new()),
        })
        .journal_capacity(16)
        .render(|| println!("  (render)"))
        .build()
        .unwrap();

    let toggle = engine.create_action(
        CursorSource::factory(|index: &usize| todo_at(*index).then(&cursor!(Todo => done))),
        Handler::new(|done: &Arc<bool>, _: &usize| Arc::new(!**done)),
    );

    let show = engine.create_actions(vec![
        ActionPair::new(cursor!(TodoState => filter), assign::<String>()),
        ActionPair::new(
            cursor!(TodoState => status),
            Handler::new(|_: &Arc<String>, filter: &String| {
                Arc::new(format!("showing {filter}"))
            }),
        ),
    ]);

    println!("toggle(1):");
    toggle.dispatch(1).unwrap();

    println!("toggle(2):");
    toggle.dispatch(2).unwrap();

    println!("show(\"done\"):");
    show.dispatch("done".to_string()).unwrap();

    let state = engine.state();
    println!("\nstatus: {}", state.status);
    for todo in state.todos.iter() {
        let mark = if *todo.done { "x" } else { " " };
        println!("  [{mark}] {}", todo.title);
    }

    if let Some(journal) = engine.journal() {
        println!("\nwritten cursors: {:?}", journal.cursors());
    }

    println!("\n=== Example Complete ===");
}
