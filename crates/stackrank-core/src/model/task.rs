use serde::{Deserialize, Serialize};

/// A task submitted for one analysis call.
///
/// `title` identifies the task within the batch; dependency entries refer to
/// other tasks by title. `due_date` stays a raw `YYYY-MM-DD` string at this
/// layer because a malformed date must degrade to "no deadline" inside the
/// scorer instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub estimated_hours: u32,
    #[serde(default)]
    pub importance: u8,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// A task plus its composite priority score and explanation.
///
/// `score` is in `[0, 100]`, rounded to two decimals. `explanation` lists
/// the weighted components in fixed order, with a trailing cycle-penalty
/// segment only when the penalty applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTask {
    #[serde(flatten)]
    pub task: Task,
    pub score: f64,
    pub explanation: String,
}
