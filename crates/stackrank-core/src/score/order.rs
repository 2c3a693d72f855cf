//! Strategy ordering for a scored batch.

use chrono::NaiveDate;

use super::composite::parse_due_date;
use crate::model::{ScoredTask, Strategy};

/// Order a scored batch according to `strategy`.
///
/// One comparator per variant; sorting is stable, so ties not covered by a
/// tie-break keep input order. Scores are never recomputed here.
#[must_use]
pub fn sort_tasks(mut scored: Vec<ScoredTask>, strategy: Strategy) -> Vec<ScoredTask> {
    match strategy {
        Strategy::FastestWins => scored.sort_by(|a, b| {
            a.task
                .estimated_hours
                .cmp(&b.task.estimated_hours)
                .then_with(|| b.score.total_cmp(&a.score))
        }),
        Strategy::HighImpact => scored.sort_by(|a, b| {
            b.task
                .importance
                .cmp(&a.task.importance)
                .then_with(|| b.score.total_cmp(&a.score))
        }),
        Strategy::DeadlineDriven => scored.sort_by_key(due_key),
        Strategy::SmartBalance => scored.sort_by(|a, b| b.score.total_cmp(&a.score)),
    }
    scored
}

/// Undated tasks sort after every dated task.
fn due_key(entry: &ScoredTask) -> (bool, NaiveDate) {
    parse_due_date(entry.task.due_date.as_deref())
        .map_or((true, NaiveDate::MAX), |date| (false, date))
}
