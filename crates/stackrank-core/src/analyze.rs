//! The analysis pipeline: the one operation external layers call.

use chrono::NaiveDate;
use tracing::{debug, instrument};

use crate::graph::{DepGraph, cycles, fanin};
use crate::model::{ScoredTask, Strategy, Task};
use crate::score::{composite, order};

/// Score and rank `tasks` under `strategy`, with `today` as the urgency
/// reference date.
///
/// Fixed composition: build graph → detect cycles → compute fan-in → score
/// each task independently → sort. Pure function of its inputs; calling it
/// twice with the same batch and reference date produces identical scores
/// and explanation strings.
#[must_use]
#[instrument(skip(tasks), fields(task_count = tasks.len()))]
pub fn analyze(tasks: &[Task], strategy: Strategy, today: NaiveDate) -> Vec<ScoredTask> {
    let graph = DepGraph::from_tasks(tasks);
    let cyclic = cycles::cyclic_titles(&graph);
    let dependents = fanin::dependent_counts(tasks);
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        cyclic = cyclic.len(),
        "dependency graph ready"
    );

    let scored = tasks
        .iter()
        .map(|task| composite::score_task(task, &dependents, &cyclic, today))
        .collect();
    order::sort_tasks(scored, strategy)
}

/// [`analyze`] with the reference date defaulted to the local calendar date.
#[must_use]
pub fn analyze_now(tasks: &[Task], strategy: Strategy) -> Vec<ScoredTask> {
    analyze(tasks, strategy, chrono::Local::now().date_naive())
}
