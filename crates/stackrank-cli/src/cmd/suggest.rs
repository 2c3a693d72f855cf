use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use clap::Args;
use serde::Serialize;

use stackrank_core::model::{ScoredTask, Strategy};
use stackrank_core::{analyze, db};

use crate::output::{self, CliError, OutputMode, render, render_error};

/// Arguments for `sr suggest`.
#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// Number of suggestions to return.
    #[arg(long, default_value_t = 3, value_name = "N")]
    limit: usize,

    /// How many recently saved tasks to re-rank.
    #[arg(long, default_value_t = 200, value_name = "N")]
    window: usize,
}

#[derive(Debug, Serialize)]
struct SuggestReport {
    results: Vec<ScoredTask>,
}

/// Execute `sr suggest`.
///
/// Loads the most recent saved tasks, re-ranks them under `smart_balance`,
/// and returns the top picks. The read is purely historical; nothing feeds
/// back into scoring.
pub fn run_suggest(args: &SuggestArgs, db_path: &Path, mode: OutputMode) -> anyhow::Result<()> {
    if !db_path.exists() {
        render_error(
            mode,
            &CliError::with_details(
                "scored-task store not found",
                "run `sr analyze` first to save a batch",
                "store_missing",
            ),
        )?;
        anyhow::bail!("store not found");
    }

    let conn = db::open_store(db_path).context("open scored-task store")?;
    let tasks = db::store::recent_tasks(&conn, args.window).context("load recent tasks")?;

    let mut results = analyze::analyze_now(&tasks, Strategy::SmartBalance);
    results.truncate(args.limit);

    let report = SuggestReport { results };
    render(mode, &report, render_report_human)
}

fn render_report_human(report: &SuggestReport, w: &mut dyn Write) -> io::Result<()> {
    output::section(w, "Suggested next tasks")?;

    if report.results.is_empty() {
        writeln!(w, "(none)")?;
        return Ok(());
    }

    writeln!(w, "{:>4}  {:>7}  TITLE", "RANK", "SCORE")?;
    for (idx, entry) in report.results.iter().enumerate() {
        writeln!(w, "{:>4}  {:>7.2}  {}", idx + 1, entry.score, entry.task.title)?;
    }

    Ok(())
}
