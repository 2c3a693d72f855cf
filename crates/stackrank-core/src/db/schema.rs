//! SQL schema for the scored-task store.

/// Initial schema: one append-only table of scored results.
///
/// `dependencies` holds a JSON array of titles; `strategy` records the
/// ordering the batch was saved under; `created_at_us` is the save
/// timestamp in microseconds since the Unix epoch.
pub const MIGRATION_V1_SQL: &str = "
CREATE TABLE IF NOT EXISTS scored_tasks (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    title           TEXT NOT NULL,
    due_date        TEXT,
    estimated_hours INTEGER NOT NULL DEFAULT 0,
    importance      INTEGER NOT NULL DEFAULT 0,
    dependencies    TEXT NOT NULL DEFAULT '[]',
    score           REAL NOT NULL,
    explanation     TEXT NOT NULL,
    strategy        TEXT NOT NULL,
    created_at_us   INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_scored_tasks_created_at
    ON scored_tasks(created_at_us DESC);
";
