//! Property tests for the scoring pipeline.

use chrono::NaiveDate;
use proptest::prelude::*;

use stackrank_core::analyze;
use stackrank_core::model::{Strategy as RankStrategy, Task};

const REFERENCE_DAY: &str = "2026-08-07";

fn reference_day() -> NaiveDate {
    NaiveDate::parse_from_str(REFERENCE_DAY, "%Y-%m-%d").expect("valid date")
}

/// A raw task blueprint: everything needed to build a batch member whose
/// dependencies point back into the batch by index.
#[derive(Debug, Clone)]
struct Blueprint {
    due_offset: Option<i64>,
    hours: u32,
    importance: u8,
    dep_picks: Vec<usize>,
}

fn blueprint() -> impl Strategy<Value = Blueprint> {
    (
        prop::option::of(-60i64..120),
        0u32..50,
        0u8..=10,
        prop::collection::vec(0usize..16, 0..4),
    )
        .prop_map(|(due_offset, hours, importance, dep_picks)| Blueprint {
            due_offset,
            hours,
            importance,
            dep_picks,
        })
}

fn build_batch(blueprints: &[Blueprint]) -> Vec<Task> {
    let count = blueprints.len();
    blueprints
        .iter()
        .enumerate()
        .map(|(i, bp)| Task {
            title: format!("task-{i}"),
            due_date: bp.due_offset.map(|offset| {
                (reference_day() + chrono::Duration::days(offset))
                    .format("%Y-%m-%d")
                    .to_string()
            }),
            estimated_hours: bp.hours,
            importance: bp.importance,
            dependencies: bp
                .dep_picks
                .iter()
                .map(|pick| format!("task-{}", pick % count))
                .collect(),
        })
        .collect()
}

fn any_strategy() -> impl Strategy<Value = RankStrategy> {
    prop::sample::select(RankStrategy::ALL.to_vec())
}

proptest! {
    #[test]
    fn scores_stay_within_bounds(
        blueprints in prop::collection::vec(blueprint(), 1..20),
        strategy in any_strategy(),
    ) {
        let tasks = build_batch(&blueprints);
        let results = analyze::analyze(&tasks, strategy, reference_day());

        for entry in &results {
            prop_assert!(entry.score >= 0.0, "score {} below zero", entry.score);
            prop_assert!(entry.score <= 100.0, "score {} above hundred", entry.score);
        }
    }

    #[test]
    fn output_is_a_permutation_of_the_input(
        blueprints in prop::collection::vec(blueprint(), 1..20),
        strategy in any_strategy(),
    ) {
        let tasks = build_batch(&blueprints);
        let results = analyze::analyze(&tasks, strategy, reference_day());

        prop_assert_eq!(results.len(), tasks.len());
        let mut expected: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
        let mut actual: Vec<&str> = results.iter().map(|r| r.task.title.as_str()).collect();
        expected.sort_unstable();
        actual.sort_unstable();
        prop_assert_eq!(expected, actual);
    }

    #[test]
    fn analysis_is_deterministic(
        blueprints in prop::collection::vec(blueprint(), 1..12),
        strategy in any_strategy(),
    ) {
        let tasks = build_batch(&blueprints);
        let first = analyze::analyze(&tasks, strategy, reference_day());
        let second = analyze::analyze(&tasks, strategy, reference_day());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_explanation_lists_the_four_components(
        blueprints in prop::collection::vec(blueprint(), 1..12),
    ) {
        let tasks = build_batch(&blueprints);
        let results = analyze::analyze(&tasks, RankStrategy::SmartBalance, reference_day());

        for entry in &results {
            for component in ["Urgency=", "Importance=", "EffortFit=", "DependencyImpact="] {
                prop_assert!(
                    entry.explanation.contains(component),
                    "missing {} in '{}'",
                    component,
                    entry.explanation
                );
            }
        }
    }
}
