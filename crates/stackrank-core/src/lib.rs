#![forbid(unsafe_code)]
//! stackrank-core library.
//!
//! Turns a batch of raw task records into dependency-aware priority scores
//! with human-readable explanations, ordered under a selectable strategy.
//! The whole pipeline is synchronous and pure: one [`analyze`] call builds
//! the dependency graph, detects cycles, counts fan-in, scores every task,
//! and sorts the result. Nothing is shared between calls.
//!
//! # Conventions
//!
//! - **Errors**: scoring degrades rather than fails; only the storage layer
//!   returns `anyhow::Result`.
//! - **Logging**: use `tracing` macros (`info!`, `warn!`, `debug!`, `trace!`).

pub mod analyze;
pub mod db;
pub mod graph;
pub mod model;
pub mod score;

pub use analyze::{analyze, analyze_now};
pub use model::{ScoredTask, Strategy, Task};
