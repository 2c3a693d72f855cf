//! Dependency graph for one analysis call.
//!
//! # Overview
//!
//! A batch of tasks is turned into a petgraph directed graph where nodes are
//! task titles and an edge `A → B` means "A depends on B". The graph is
//! ephemeral: rebuilt fresh on every [`crate::analyze`] call and never
//! persisted.
//!
//! ## Pipeline
//!
//! ```text
//! &[Task]
//!    ↓  build::DepGraph::from_tasks()
//! DepGraph (DiGraph, possible cycles)
//!    ├─ cycles::cyclic_titles()     → titles on or leading into a cycle
//!    └─ fanin::dependent_counts()   → title → distinct dependent count
//! ```
//!
//! Both derived aggregates are computed once and shared read-only by every
//! per-task scoring operation.

pub mod build;
pub mod cycles;
pub mod fanin;

pub use build::DepGraph;
