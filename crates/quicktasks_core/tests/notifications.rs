use quicktasks_core::{NotifyPolicy, SequentialIdSource, StoreOptions, TaskStore};
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

fn counting_observer<S: quicktasks_core::IdSource>(store: &mut TaskStore<S>) -> Arc<AtomicUsize> {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    store.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    calls
}

fn on_change_store() -> TaskStore {
    TaskStore::with_options(
        SequentialIdSource::new(),
        StoreOptions::with_notify_policy(NotifyPolicy::OnChange),
    )
}

#[test]
fn preference_writes_fire_one_notification_each() {
    let mut store = TaskStore::new();
    let calls = counting_observer(&mut store);

    store.set_show_motivation(false);
    store.set_show_motivation(true);

    assert!(store.show_motivation());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(store.revision(), 2);
}

#[test]
fn blank_add_does_not_notify() {
    let mut store = TaskStore::new();
    let calls = counting_observer(&mut store);

    store.add_task("");
    store.add_task("   ");

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(store.revision(), 0);
}

#[test]
fn always_policy_notifies_on_unmatched_toggle_and_delete() {
    let mut store = TaskStore::new();
    let calls = counting_observer(&mut store);

    store.toggle_done(404);
    store.delete_task(404);
    store.set_show_motivation(true);

    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn on_change_policy_skips_noop_intents() {
    let mut store = on_change_store();
    let calls = counting_observer(&mut store);

    store.toggle_done(404);
    store.delete_task(404);
    store.set_show_motivation(true);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let id = store.add_task("real").unwrap();
    store.toggle_done(id);
    store.delete_task(id);
    store.set_show_motivation(false);
    assert_eq!(calls.load(Ordering::SeqCst), 4);
    assert_eq!(store.revision(), 4);
}

#[test]
fn every_observer_sees_post_mutation_snapshot() {
    let mut store = TaskStore::new();
    let first_seen = Arc::new(Mutex::new(Vec::new()));
    let second_seen = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&first_seen);
    store.subscribe(move |store| {
        sink.lock().unwrap().push(store.stats_view());
    });
    let sink = Arc::clone(&second_seen);
    store.subscribe(move |store| {
        sink.lock().unwrap().push(store.stats_view());
    });

    let id = store.add_task("watch me").unwrap();
    store.toggle_done(id);

    let first = first_seen.lock().unwrap();
    let second = second_seen.lock().unwrap();
    assert_eq!(first.len(), 2);
    assert_eq!(*first, *second);
    assert_eq!((first[0].total, first[0].done), (1, 0));
    assert_eq!((first[1].total, first[1].done, first[1].percent), (1, 1, 100));
}

#[test]
fn revision_counts_notifications() {
    let mut store = TaskStore::new();
    assert_eq!(store.revision(), 0);

    let id = store.add_task("a").unwrap();
    store.toggle_done(id);
    store.delete_task(id);
    store.add_task(" ");

    assert_eq!(store.revision(), 3);
}

#[test]
fn panicking_observer_keeps_subscriptions_alive() {
    let mut store = TaskStore::new();
    let healthy_calls = counting_observer(&mut store);
    let has_panicked = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&has_panicked);
    store.subscribe(move |_| {
        if !flag.swap(true, Ordering::SeqCst) {
            panic!("observer failed once");
        }
    });

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| store.add_task("a")));
    assert!(outcome.is_err());
    assert_eq!(store.observer_count(), 2);
    assert_eq!(store.len(), 1);
    assert_eq!(store.revision(), 1);

    store.add_task("b").unwrap();
    assert!(has_panicked.load(Ordering::SeqCst));
    assert_eq!(healthy_calls.load(Ordering::SeqCst), 2);
    assert_eq!(store.observer_count(), 2);
}
