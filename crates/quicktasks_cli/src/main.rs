//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `quicktasks_core` linkage.
//! - Drive the sample task flow and print views deterministically.
//!
//! Logging is enabled only when `QUICKTASKS_LOG_DIR` is set.

use quicktasks_core::{LoggingConfig, TaskStore};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Some(config) = LoggingConfig::from_env() {
        if let Err(err) = quicktasks_core::init_logging_with(&config) {
            eprintln!("quicktasks logging init failed: {err}");
            return ExitCode::FAILURE;
        }
    }

    println!("quicktasks_core ping={}", quicktasks_core::ping());
    println!("quicktasks_core version={}", quicktasks_core::core_version());

    let mut store = TaskStore::new();
    store.subscribe(|store| println!("revision={} tasks={}", store.revision(), store.len()));
    store.seed_demo();

    if let Some(line) = store.preferences().motivation_line() {
        println!("{line}");
    }
    for task in store.tasks() {
        let mark = if task.done { 'x' } else { ' ' };
        println!("[{mark}] {} (id={})", task.title, task.id);
    }

    let stats = store.stats_view();
    println!(
        "total={} done={} completion={}%",
        stats.total, stats.done, stats.percent
    );
    ExitCode::SUCCESS
}
