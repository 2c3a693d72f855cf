//! In-memory model: task records and ranking strategies.

pub mod strategy;
pub mod task;

pub use strategy::Strategy;
pub use task::{ScoredTask, Task};
