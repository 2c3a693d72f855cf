//! Boundary validation for analyze payloads.
//!
//! The core engine assumes clean input; everything here rejects a payload
//! before it reaches scoring. Checks mirror the request contract: shape,
//! title presence, importance range, date format, known strategy names,
//! and unique titles within a batch.

use chrono::NaiveDate;
use serde_json::Value;
use std::collections::HashSet;

use stackrank_core::model::{Strategy, Task};

use crate::output::CliError;

pub const MAX_IMPORTANCE: u8 = 10;

/// A rejected field with enough context for both humans and machines.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: &'static str,
    pub value: String,
    pub reason: String,
    pub suggestion: String,
    pub code: &'static str,
}

impl ValidationError {
    pub fn new(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
        suggestion: impl Into<String>,
        code: &'static str,
    ) -> Self {
        Self {
            field,
            value: value.into(),
            reason: reason.into(),
            suggestion: suggestion.into(),
            code,
        }
    }

    pub fn to_cli_error(&self) -> CliError {
        CliError::with_details(
            format!("invalid {} '{}': {}", self.field, self.value, self.reason),
            self.suggestion.clone(),
            self.code,
        )
    }
}

/// Check the payload envelope and return the raw task array.
pub fn payload_tasks(payload: &Value) -> Result<&Vec<Value>, ValidationError> {
    if !payload.is_object() {
        return Err(ValidationError::new(
            "payload",
            payload.to_string(),
            "must be a JSON object",
            "send {\"tasks\": [...], \"strategy\": \"...\"}",
            "invalid_payload",
        ));
    }

    let Some(tasks) = payload.get("tasks").and_then(Value::as_array) else {
        return Err(ValidationError::new(
            "tasks",
            String::new(),
            "must be a non-empty array",
            "provide at least one task object under `tasks`",
            "invalid_tasks",
        ));
    };
    if tasks.is_empty() {
        return Err(ValidationError::new(
            "tasks",
            "[]",
            "must be a non-empty array",
            "provide at least one task object under `tasks`",
            "invalid_tasks",
        ));
    }

    Ok(tasks)
}

/// Reject raw task values normalization would otherwise paper over.
pub fn validate_raw_task(raw: &Value) -> Result<(), ValidationError> {
    if !raw.is_object() {
        return Err(ValidationError::new(
            "task",
            raw.to_string(),
            "each task must be an object",
            "wrap each task in a JSON object with a `title`",
            "invalid_task",
        ));
    }

    if let Some(Value::Array(deps)) = raw.get("dependencies") {
        for dep in deps {
            if !dep.is_string() {
                return Err(ValidationError::new(
                    "dependencies",
                    dep.to_string(),
                    "each dependency must be a string",
                    "reference other tasks by title",
                    "invalid_dependency",
                ));
            }
        }
    }

    Ok(())
}

/// Validate one normalized task.
pub fn validate_task(task: &Task) -> Result<(), ValidationError> {
    if task.title.is_empty() {
        return Err(ValidationError::new(
            "title",
            &task.title,
            "must not be empty",
            "give every task a non-empty title",
            "invalid_title",
        ));
    }

    if task.importance > MAX_IMPORTANCE {
        return Err(ValidationError::new(
            "importance",
            task.importance.to_string(),
            "must be between 0 and 10",
            "lower the importance into the 0-10 range",
            "invalid_importance",
        ));
    }

    if let Some(due) = task.due_date.as_deref() {
        if NaiveDate::parse_from_str(due, "%Y-%m-%d").is_err() {
            return Err(ValidationError::new(
                "due_date",
                due,
                "must be in YYYY-MM-DD format",
                "format the due date like 2026-08-07",
                "invalid_due_date",
            ));
        }
    }

    Ok(())
}

/// Strict strategy lookup; unknown names are a boundary error, never a
/// silent fallback.
pub fn validate_strategy(name: &str) -> Result<Strategy, ValidationError> {
    name.parse().map_err(|_| {
        ValidationError::new(
            "strategy",
            name,
            "unknown strategy",
            "pick one of: fastest_wins, high_impact, deadline_driven, smart_balance",
            "invalid_strategy",
        )
    })
}

/// Duplicate titles are rejected here so the engine's last-write-wins
/// graph quirk never triggers for CLI input.
pub fn validate_unique_titles(tasks: &[Task]) -> Result<(), ValidationError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(tasks.len());
    for task in tasks {
        if !seen.insert(task.title.as_str()) {
            return Err(ValidationError::new(
                "title",
                &task.title,
                "duplicate title within the batch",
                "give every task in one batch a unique title",
                "duplicate_title",
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn task(title: &str) -> Task {
        Task {
            title: title.to_string(),
            due_date: None,
            estimated_hours: 1,
            importance: 5,
            dependencies: Vec::new(),
        }
    }

    #[test]
    fn payload_must_be_an_object() {
        let err = payload_tasks(&json!([1, 2])).expect_err("must reject");
        assert_eq!(err.code, "invalid_payload");
    }

    #[test]
    fn tasks_must_be_a_non_empty_array() {
        assert_eq!(
            payload_tasks(&json!({})).expect_err("missing").code,
            "invalid_tasks"
        );
        assert_eq!(
            payload_tasks(&json!({"tasks": []})).expect_err("empty").code,
            "invalid_tasks"
        );
        assert_eq!(
            payload_tasks(&json!({"tasks": "nope"})).expect_err("wrong type").code,
            "invalid_tasks"
        );
    }

    #[test]
    fn raw_task_must_be_an_object() {
        let err = validate_raw_task(&json!("just a string")).expect_err("must reject");
        assert_eq!(err.code, "invalid_task");
    }

    #[test]
    fn raw_dependencies_must_be_strings() {
        let err =
            validate_raw_task(&json!({"title": "T", "dependencies": ["ok", 7]}))
                .expect_err("must reject");
        assert_eq!(err.code, "invalid_dependency");
    }

    #[test]
    fn empty_title_is_rejected() {
        let err = validate_task(&task("")).expect_err("must reject");
        assert_eq!(err.code, "invalid_title");
    }

    #[test]
    fn importance_above_ten_is_rejected() {
        let mut t = task("T");
        t.importance = 11;
        let err = validate_task(&t).expect_err("must reject");
        assert_eq!(err.code, "invalid_importance");
    }

    #[test]
    fn malformed_due_date_is_rejected_at_the_boundary() {
        // The engine would degrade this to "no deadline"; the boundary is
        // stricter and refuses it outright.
        let mut t = task("T");
        t.due_date = Some("08/07/2026".into());
        let err = validate_task(&t).expect_err("must reject");
        assert_eq!(err.code, "invalid_due_date");
    }

    #[test]
    fn known_strategies_pass_unknown_fail() {
        assert_eq!(
            validate_strategy("fastest_wins").expect("known"),
            Strategy::FastestWins
        );
        let err = validate_strategy("yolo").expect_err("unknown");
        assert_eq!(err.code, "invalid_strategy");
    }

    #[test]
    fn duplicate_titles_are_rejected() {
        let err =
            validate_unique_titles(&[task("A"), task("B"), task("A")]).expect_err("must reject");
        assert_eq!(err.code, "duplicate_title");
        assert_eq!(err.value, "A");
    }

    #[test]
    fn to_cli_error_carries_code_and_suggestion() {
        let err = validate_strategy("yolo").expect_err("unknown");
        let cli = err.to_cli_error();
        assert!(cli.message.contains("yolo"));
        assert_eq!(cli.error_code.as_deref(), Some("invalid_strategy"));
        assert!(cli.suggestion.is_some());
    }
}
