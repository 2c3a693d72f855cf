//! Payload ingestion and normalization for `sr analyze`.
//!
//! Accepts loosely-typed JSON (numbers as strings, dependencies as a
//! comma-separated string) and coerces it into the core task shape. Strict
//! rejection lives in [`crate::validate`]; everything here only shapes.

use serde_json::Value;
use stackrank_core::model::Task;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("read payload from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read the raw JSON payload from `file`, or stdin when no file is given.
///
/// # Errors
///
/// Returns an error when the source cannot be read or is not valid JSON.
pub fn read_payload(file: Option<&Path>) -> Result<Value, IngestError> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path).map_err(|source| IngestError::Io {
            path: path.display().to_string(),
            source,
        })?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| IngestError::Io {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            buf
        }
    };

    Ok(serde_json::from_str(&raw)?)
}

/// Coerce one raw task object into the core task shape.
///
/// - `title`: string-coerced and trimmed.
/// - `due_date`: string-coerced and trimmed; empty means none.
/// - `estimated_hours` / `importance`: integer-coerced, non-coercible → 0,
///   clamped non-negative.
/// - `dependencies`: list of strings kept as-is; a non-empty
///   comma-separated string is split and trimmed; anything else is empty.
#[must_use]
pub fn normalize_task(raw: &Value) -> Task {
    Task {
        title: coerce_string(raw.get("title")).trim().to_string(),
        due_date: normalize_due_date(raw.get("due_date")),
        estimated_hours: clamp_u32(coerce_int(raw.get("estimated_hours"))),
        importance: clamp_u8(coerce_int(raw.get("importance"))),
        dependencies: normalize_dependencies(raw.get("dependencies")),
    }
}

fn coerce_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn coerce_int(value: Option<&Value>) -> i64 {
    let parsed = match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    };
    parsed.max(0)
}

fn clamp_u32(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

fn clamp_u8(value: i64) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}

fn normalize_due_date(value: Option<&Value>) -> Option<String> {
    let raw = coerce_string(value);
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn normalize_dependencies(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        Some(Value::String(s)) if !s.trim().is_empty() => {
            s.split(',').map(|d| d.trim().to_string()).collect()
        }
        _ => Vec::new(),
    }
}
