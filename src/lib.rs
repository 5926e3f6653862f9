// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod scope;
pub mod subst;

use std::path::PathBuf;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::info;

use crate::cli::CliArgs;
use crate::config::loader::load_config;
use crate::config::model::ConfigStore;
use crate::engine::{dispatch_section, drain_completions, WorkerDone};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - per-section dispatch (in file order)
/// - the completion drain
///
/// The two fatal cases (unreadable config, duplicate `[$global]`) surface
/// here as errors before any dispatch; everything else has already been
/// logged and degraded inside the components.
pub async fn run(args: CliArgs) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let store = load_config(&config_path)?;

    if args.dry_run {
        print_dry_run(&store);
        return Ok(());
    }

    // One channel of completion tokens per run; workers hold clones of the
    // sender, the drain owns the receiver.
    let (done_tx, done_rx) = mpsc::channel::<WorkerDone>(64);

    let mut spawned = 0usize;
    for (pattern, section) in &store.patterns {
        spawned += dispatch_section(pattern, &store.global, section, &done_tx);
    }
    drop(done_tx);

    info!(workers = spawned, "all sections dispatched, draining completions");
    drain_completions(done_rx, spawned).await?;

    info!("run complete");
    Ok(())
}

/// Simple dry-run output: print the global scope and each pattern section.
fn print_dry_run(store: &ConfigStore) {
    println!("stencil dry-run");

    println!("global:");
    for (name, value) in &store.global.directives {
        println!("  {name} = {value}");
    }
    for (name, value) in &store.global.variables {
        println!("  {name} = {value}");
    }
    println!();

    println!("sections ({}):", store.section_count());
    for (pattern, section) in &store.patterns {
        println!("  - [{pattern}]");
        for (name, value) in &section.directives {
            println!("      {name} = {value}");
        }
        for (name, value) in &section.variables {
            println!("      {name} = {value}");
        }
    }
}
