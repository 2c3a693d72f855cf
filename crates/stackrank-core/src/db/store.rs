//! Insert-many sink and most-recent-N read for scored batches.

use anyhow::{Context, Result};
use rusqlite::{Connection, params};
use tracing::debug;

use crate::model::{ScoredTask, Strategy, Task};

/// Persist a scored batch, tagging every row with the strategy it was
/// ranked under and the save timestamp (µs since the Unix epoch).
///
/// The whole batch lands in one transaction. Returns the row count.
///
/// # Errors
///
/// Returns an error if the transaction or any insert fails.
pub fn save_scored(
    conn: &mut Connection,
    scored: &[ScoredTask],
    strategy: Strategy,
    saved_at_us: i64,
) -> Result<usize> {
    let tx = conn.transaction().context("begin save transaction")?;
    {
        let mut stmt = tx
            .prepare(
                "INSERT INTO scored_tasks (
                    title, due_date, estimated_hours, importance, dependencies,
                    score, explanation, strategy, created_at_us
                 ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )
            .context("prepare scored_tasks insert")?;

        for entry in scored {
            let dependencies = serde_json::to_string(&entry.task.dependencies)
                .context("encode dependencies as JSON")?;
            stmt.execute(params![
                entry.task.title,
                entry.task.due_date,
                entry.task.estimated_hours,
                entry.task.importance,
                dependencies,
                entry.score,
                entry.explanation,
                strategy.as_str(),
                saved_at_us,
            ])
            .with_context(|| format!("insert scored task '{}'", entry.task.title))?;
        }
    }
    tx.commit().context("commit save transaction")?;

    debug!(rows = scored.len(), strategy = %strategy, "scored batch saved");
    Ok(scored.len())
}

/// Load the most recently saved tasks, newest first, as plain task records
/// ready for re-analysis.
///
/// Rows with an undecodable dependency column degrade to an empty list
/// rather than failing the read.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn recent_tasks(conn: &Connection, limit: usize) -> Result<Vec<Task>> {
    let mut stmt = conn
        .prepare(
            "SELECT title, due_date, estimated_hours, importance, dependencies
             FROM scored_tasks
             ORDER BY created_at_us DESC, id DESC
             LIMIT ?1",
        )
        .context("prepare recent_tasks query")?;

    let tasks = stmt
        .query_map([i64::try_from(limit).unwrap_or(i64::MAX)], |row| {
            let dependencies: String = row.get(4)?;
            Ok(Task {
                title: row.get(0)?,
                due_date: row.get(1)?,
                estimated_hours: row.get(2)?,
                importance: row.get(3)?,
                dependencies: serde_json::from_str(&dependencies).unwrap_or_default(),
            })
        })
        .context("execute recent_tasks query")?
        .collect::<Result<Vec<_>, _>>()
        .context("collect recent tasks")?;

    Ok(tasks)
}
