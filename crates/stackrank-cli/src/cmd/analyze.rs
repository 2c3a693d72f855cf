use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use stackrank_core::model::{ScoredTask, Strategy, Task};
use stackrank_core::{analyze, db};

use crate::config::Settings;
use crate::ingest;
use crate::output::{self, CliError, OutputMode, render, render_error};
use crate::validate;

/// Arguments for `sr analyze`.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Read the JSON payload from this file instead of stdin.
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Ranking strategy; overrides the payload's `strategy` field.
    #[arg(long, value_name = "NAME")]
    strategy: Option<String>,

    /// Reference date for urgency scoring (YYYY-MM-DD); defaults to today.
    #[arg(long, value_name = "DATE")]
    today: Option<NaiveDate>,

    /// Skip saving the scored batch to the store.
    #[arg(long)]
    no_save: bool,
}

#[derive(Debug, Serialize)]
struct AnalyzeReport {
    strategy: Strategy,
    results: Vec<ScoredTask>,
}

#[derive(Debug)]
struct AnalyzeRequest {
    tasks: Vec<Task>,
    strategy: Strategy,
}

/// Execute `sr analyze`.
pub fn run_analyze(
    args: &AnalyzeArgs,
    settings: &Settings,
    db_path: &Path,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let payload = match ingest::read_payload(args.file.as_deref()) {
        Ok(payload) => payload,
        Err(err) => {
            render_error(
                mode,
                &CliError::with_details(
                    err.to_string(),
                    "provide a JSON object with a `tasks` array",
                    "invalid_payload",
                ),
            )?;
            anyhow::bail!("invalid payload");
        }
    };

    let request = match build_request(&payload, args.strategy.as_deref(), settings.default_strategy)
    {
        Ok(request) => request,
        Err(validation) => {
            render_error(mode, &validation.to_cli_error())?;
            anyhow::bail!("validation failed");
        }
    };

    let today = args
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let results = analyze::analyze(&request.tasks, request.strategy, today);

    if !args.no_save {
        let mut conn = db::open_store(db_path).context("open scored-task store")?;
        let saved = db::store::save_scored(
            &mut conn,
            &results,
            request.strategy,
            chrono::Utc::now().timestamp_micros(),
        )?;
        info!(saved, db = %db_path.display(), "scored batch saved");
    }

    let report = AnalyzeReport {
        strategy: request.strategy,
        results,
    };
    render(mode, &report, render_report_human)
}

/// Normalize and validate the raw payload into an analyze request.
///
/// Strategy precedence: `--strategy` flag, then the payload's `strategy`
/// field, then the configured default. All three paths validate strictly.
fn build_request(
    payload: &Value,
    strategy_flag: Option<&str>,
    default_strategy: Strategy,
) -> Result<AnalyzeRequest, validate::ValidationError> {
    let raw_tasks = validate::payload_tasks(payload)?;

    let mut tasks = Vec::with_capacity(raw_tasks.len());
    for raw in raw_tasks {
        validate::validate_raw_task(raw)?;
        let task = ingest::normalize_task(raw);
        validate::validate_task(&task)?;
        tasks.push(task);
    }
    validate::validate_unique_titles(&tasks)?;

    let named = strategy_flag.or_else(|| payload.get("strategy").and_then(Value::as_str));
    let strategy = match named {
        Some(name) => validate::validate_strategy(name)?,
        None => default_strategy,
    };

    Ok(AnalyzeRequest { tasks, strategy })
}

fn render_report_human(report: &AnalyzeReport, w: &mut dyn Write) -> io::Result<()> {
    output::section(w, &format!("Ranked tasks ({})", report.strategy))?;

    if report.results.is_empty() {
        writeln!(w, "(none)")?;
        return Ok(());
    }

    writeln!(w, "{:>4}  {:>7}  {:>5}  {:<10}  TITLE", "RANK", "SCORE", "HOURS", "DUE")?;
    for (idx, entry) in report.results.iter().enumerate() {
        writeln!(
            w,
            "{:>4}  {:>7.2}  {:>5}  {:<10}  {}",
            idx + 1,
            entry.score,
            entry.task.estimated_hours,
            entry.task.due_date.as_deref().unwrap_or("-"),
            entry.task.title
        )?;
    }

    writeln!(w)?;
    output::section(w, "Why")?;
    for (idx, entry) in report.results.iter().enumerate() {
        writeln!(w, "{:>4}. {}: {}", idx + 1, entry.task.title, entry.explanation)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn build_request_defaults_to_configured_strategy() {
        let payload = json!({"tasks": [{"title": "A"}]});
        let request =
            build_request(&payload, None, Strategy::HighImpact).expect("valid request");
        assert_eq!(request.strategy, Strategy::HighImpact);
        assert_eq!(request.tasks.len(), 1);
    }

    #[test]
    fn flag_overrides_payload_strategy() {
        let payload = json!({"tasks": [{"title": "A"}], "strategy": "deadline_driven"});
        let request = build_request(&payload, Some("fastest_wins"), Strategy::SmartBalance)
            .expect("valid request");
        assert_eq!(request.strategy, Strategy::FastestWins);
    }

    #[test]
    fn payload_strategy_beats_the_default() {
        let payload = json!({"tasks": [{"title": "A"}], "strategy": "deadline_driven"});
        let request =
            build_request(&payload, None, Strategy::SmartBalance).expect("valid request");
        assert_eq!(request.strategy, Strategy::DeadlineDriven);
    }

    #[test]
    fn unknown_payload_strategy_is_rejected() {
        let payload = json!({"tasks": [{"title": "A"}], "strategy": "chaos_mode"});
        let err = build_request(&payload, None, Strategy::SmartBalance).expect_err("must reject");
        assert_eq!(err.code, "invalid_strategy");
    }

    #[test]
    fn duplicate_titles_are_rejected_before_analysis() {
        let payload = json!({"tasks": [{"title": "A"}, {"title": "A"}]});
        let err = build_request(&payload, None, Strategy::SmartBalance).expect_err("must reject");
        assert_eq!(err.code, "duplicate_title");
    }

    #[test]
    fn human_report_lists_ranks_and_explanations() {
        let report = AnalyzeReport {
            strategy: Strategy::SmartBalance,
            results: vec![ScoredTask {
                task: Task {
                    title: "Fix login".into(),
                    due_date: Some("2026-08-10".into()),
                    estimated_hours: 2,
                    importance: 8,
                    dependencies: Vec::new(),
                },
                score: 74.25,
                explanation:
                    "Urgency=0.90, Importance=0.80, EffortFit=1.00, DependencyImpact=0.30".into(),
            }],
        };

        let mut buf = Vec::new();
        render_report_human(&report, &mut buf).expect("render");
        let text = String::from_utf8(buf).expect("utf8");

        assert!(text.contains("Ranked tasks (smart_balance)"));
        assert!(text.contains("74.25"));
        assert!(text.contains("Fix login"));
        assert!(text.contains("Urgency=0.90"));
    }
}
