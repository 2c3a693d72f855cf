//! Dependency fan-in: how many tasks depend on each title.

use std::collections::{HashMap, HashSet};

use crate::model::Task;

/// Count, per title, how many distinct tasks list it as a dependency.
///
/// Repeated entries within one task count once. Titles nobody depends on
/// are absent from the map; callers treat a missing key as zero.
#[must_use]
pub fn dependent_counts(tasks: &[Task]) -> HashMap<String, usize> {
    let mut dependents: HashMap<&str, HashSet<&str>> = HashMap::new();
    for task in tasks {
        for dep in &task.dependencies {
            dependents
                .entry(dep.as_str())
                .or_default()
                .insert(task.title.as_str());
        }
    }

    dependents
        .into_iter()
        .map(|(title, who)| (title.to_string(), who.len()))
        .collect()
}
