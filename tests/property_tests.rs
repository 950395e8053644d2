//! Property-based tests for the action queue.
//!
//! These tests use proptest to verify ordering and render coalescing hold
//! across many randomly generated dispatch patterns.

use cursorflux::core::Handler;
use cursorflux::journal::ChangeJournal;
use cursorflux::{cursor, Action, Engine};
use chrono::Utc;
use proptest::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Clone, Debug)]
struct Model {
    total: Arc<u64>,
    trail: Arc<Vec<u8>>,
}

fn armed_engine() -> (Engine<Model>, Arc<AtomicUsize>) {
    let engine = Engine::new(Model {
        total: Arc::new(0),
        trail: Arc::new(Vec::new()),
    });
    let renders = Arc::new(AtomicUsize::new(0));
    let hits = Arc::clone(&renders);
    engine.bootstrap(move || {
        hits.fetch_add(1, Ordering::SeqCst);
    });
    (engine, renders)
}

fn push_trail(engine: &Engine<Model>) -> Action<Model, u8> {
    engine.create_action(
        cursor!(Model => trail),
        Handler::new(|trail: &Arc<Vec<u8>>, tag: &u8| {
            let mut next = (**trail).clone();
            next.push(*tag);
            Arc::new(next)
        }),
    )
}

proptest! {
    #[test]
    fn reentrant_dispatches_run_in_fifo_order(tags in prop::collection::vec(1..=255u8, 0..16)) {
        let (engine, renders) = armed_engine();
        let push = push_trail(&engine);

        let queued = tags.clone();
        let outer = engine.create_action(
            cursor!(Model => trail),
            Handler::new(move |trail: &Arc<Vec<u8>>, _: &()| {
                for tag in &queued {
                    push.dispatch(*tag).unwrap();
                }
                let mut next = (**trail).clone();
                next.push(0);
                Arc::new(next)
            }),
        );

        outer.call().unwrap();

        let mut expected = vec![0u8];
        expected.extend(tags);
        prop_assert_eq!(engine.state().trail.to_vec(), expected);
        prop_assert_eq!(renders.load(Ordering::SeqCst), 1);
        prop_assert_eq!(engine.pending(), 0);
    }

    #[test]
    fn identity_dispatches_never_render(count in 1..20usize) {
        let (engine, renders) = armed_engine();
        let before = engine.state();
        let noop = engine.create_action(cursor!(Model => total), Handler::<u64, ()>::identity());

        for _ in 0..count {
            prop_assert_eq!(noop.call(), Ok(false));
        }

        prop_assert!(Arc::ptr_eq(&before, &engine.state()));
        prop_assert_eq!(renders.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn one_render_per_external_call(batches in prop::collection::vec(0..8u64, 1..10)) {
        let (engine, renders) = armed_engine();
        let add = engine.create_action(
            cursor!(Model => total),
            Handler::new(|total: &Arc<u64>, by: &u64| Arc::new(**total + by)),
        );

        let inner = add.clone();
        let batch = engine.create_action(
            cursor!(Model => total),
            Handler::new(move |total: &Arc<u64>, size: &u64| {
                for _ in 0..*size {
                    inner.dispatch(1).unwrap();
                }
                Arc::new(**total + 1)
            }),
        );

        for size in &batches {
            batch.dispatch(*size).unwrap();
        }

        let expected: u64 = batches.iter().map(|size| size + 1).sum();
        prop_assert_eq!(*engine.state().total, expected);
        prop_assert_eq!(renders.load(Ordering::SeqCst), batches.len());
    }

    #[test]
    fn journal_never_exceeds_capacity(
        capacity in 1..8usize,
        keys in prop::collection::vec("[a-z]{1,4}", 0..20)
    ) {
        let mut journal = ChangeJournal::new(capacity);
        for key in &keys {
            journal = journal.record(key, Utc::now());
        }

        prop_assert!(journal.len() <= capacity);
        prop_assert_eq!(journal.total_recorded(), keys.len() as u64);

        let retained: Vec<&str> = keys.iter().rev().take(capacity).rev().map(String::as_str).collect();
        prop_assert_eq!(journal.cursors(), retained);
    }
}
