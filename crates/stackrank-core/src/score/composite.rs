//! Composite priority scoring for one task.
//!
//! Four sub-scores, each roughly `[0, 1]` before weighting:
//!
//! `P = urgency*0.35 + importance*0.35 + effort*0.15 + dependency*0.15`
//!
//! minus a flat cycle penalty, floored at zero, scaled to `[0, 100]`, and
//! rounded to two decimals. Weights and thresholds are fixed constants;
//! behavioral parity depends on them staying exact.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use crate::model::{ScoredTask, Task};

const URGENCY_WEIGHT: f64 = 0.35;
const IMPORTANCE_WEIGHT: f64 = 0.35;
const EFFORT_WEIGHT: f64 = 0.15;
const DEPENDENCY_WEIGHT: f64 = 0.15;

/// Flat deduction for tasks on or leading into a dependency cycle.
const CYCLE_PENALTY: f64 = 0.3;

/// Tasks with no deadline get moderate urgency.
const NO_DUE_DATE_URGENCY: f64 = 0.35;
/// Overdue boost saturates after this many days late.
const OVERDUE_WINDOW_DAYS: f64 = 14.0;
/// Linear urgency decay horizon for upcoming deadlines.
const DUE_WINDOW_DAYS: f64 = 30.0;
const URGENCY_FLOOR: f64 = 0.2;

/// Parse a `YYYY-MM-DD` due date; anything malformed means "no deadline".
pub(crate) fn parse_due_date(raw: Option<&str>) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw?, "%Y-%m-%d").ok()
}

fn urgency_score(due: Option<NaiveDate>, today: NaiveDate) -> f64 {
    let Some(due) = due else {
        return NO_DUE_DATE_URGENCY;
    };

    let days_out = (due - today).num_days();
    if days_out < 0 {
        // Overdue: boost past 1.0, capped at 1.5.
        #[allow(clippy::cast_precision_loss)]
        let late = days_out.unsigned_abs() as f64;
        return 1.0 + (late / OVERDUE_WINDOW_DAYS).min(0.5);
    }
    if days_out == 0 {
        return 1.0;
    }

    // Same linear formula beyond the horizon; the floor takes over there.
    #[allow(clippy::cast_precision_loss)]
    let out = days_out as f64;
    (1.0 - out / DUE_WINDOW_DAYS).max(URGENCY_FLOOR)
}

/// Reward small tasks. Step function, not continuous.
fn effort_score(hours: u32) -> f64 {
    if hours <= 2 {
        1.0
    } else if hours <= 6 {
        0.8
    } else if hours <= 12 {
        0.6
    } else {
        0.4
    }
}

fn dependency_score(fan_in: usize) -> f64 {
    match fan_in {
        0 => 0.3,
        1 => 0.6,
        #[allow(clippy::cast_precision_loss)]
        more => (0.6 + (more - 1) as f64 * 0.15).min(1.0),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Score one task against the shared graph-derived aggregates.
///
/// `dependents` and `cyclic` are computed once per analysis call; no task's
/// score depends on another task's score.
#[must_use]
pub fn score_task(
    task: &Task,
    dependents: &HashMap<String, usize>,
    cyclic: &HashSet<String>,
    today: NaiveDate,
) -> ScoredTask {
    let urgency = urgency_score(parse_due_date(task.due_date.as_deref()), today);
    let importance = f64::from(task.importance) / 10.0;
    let effort = effort_score(task.estimated_hours);
    let fan_in = dependents.get(task.title.as_str()).copied().unwrap_or(0);
    let dependency = dependency_score(fan_in);
    let in_cycle = cyclic.contains(task.title.as_str());
    let penalty = if in_cycle { CYCLE_PENALTY } else { 0.0 };

    let composite = urgency * URGENCY_WEIGHT
        + importance * IMPORTANCE_WEIGHT
        + effort * EFFORT_WEIGHT
        + dependency * DEPENDENCY_WEIGHT;
    let score = round2((composite - penalty).max(0.0) * 100.0);

    let mut explanation = format!(
        "Urgency={urgency:.2}, Importance={importance:.2}, \
         EffortFit={effort:.2}, DependencyImpact={dependency:.2}"
    );
    if in_cycle {
        explanation.push_str(&format!(", CyclePenalty={CYCLE_PENALTY:.2}"));
    }

    ScoredTask {
        task: task.clone(),
        score,
        explanation,
    }
}
