//! Counter
//!
//! This example shows render coalescing with a reentrant action.
//!
//! Key concepts:
//! - Bootstrapping an engine with a render callback
//! - Identity handlers do not render
//! - A handler dispatching another action still renders once
//!
//! Run with: RUST_LOG=trace cargo run --example counter

use cursorflux::core::Handler;
use cursorflux::{cursor, Engine};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug)]
struct CounterState {
    count: Arc<i64>,
    clicks: Arc<u32>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    println!("=== Counter Example ===\n");

    let engine = Engine::new(CounterState {
        count: Arc::new(0),
        clicks: Arc::new(0),
    });

    let renders = Arc::new(AtomicUsize::new(0));
    let hits = Arc::clone(&renders);
    engine.bootstrap(move || {
        let frame = hits.fetch_add(1, Ordering::SeqCst) + 1;
        println!("  render #{frame}");
    });

    let count_click = engine.create_action(
        cursor!(CounterState => clicks),
        Handler::new(|clicks: &Arc<u32>, _: &()| Arc::new(**clicks + 1)),
    );

    let add = {
        let count_click = count_click.clone();
        engine.create_action(
            cursor!(CounterState => count),
            Handler::new(move |count: &Arc<i64>, by: &i64| {
                // Queued behind this handler; runs before the render.
                count_click.call().expect("engine is bootstrapped");
                Arc::new(**count + by)
            }),
        )
    };

    let stay = engine.create_action(
        cursor!(CounterState => count),
        Handler::<i64, i64>::identity(),
    );

    println!("add(5):");
    add.dispatch(5).expect("engine is bootstrapped");

    println!("add(-2):");
    add.dispatch(-2).expect("engine is bootstrapped");

    println!("stay(0):");
    stay.dispatch(0).expect("engine is bootstrapped");

    let state = engine.state();
    println!("\ncount = {}, clicks = {}", state.count, state.clicks);
    println!("renders = {}", renders.load(Ordering::SeqCst));

    println!("\n=== Example Complete ===");
}
