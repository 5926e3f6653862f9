// src/engine/mod.rs

//! Dispatch and completion tracking for a stencil run.
//!
//! This module ties together:
//! - the per-section dispatcher that merges scopes, expands the pattern and
//!   spawns one worker per matched file
//! - the completion drain that blocks until every spawned worker has
//!   signalled, so a run can never exit with writes still in flight

pub mod dispatch;
pub mod tracker;

pub use dispatch::dispatch_section;
pub use tracker::{drain_completions, WorkerDone};
