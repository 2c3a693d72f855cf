#![forbid(unsafe_code)]

mod cmd;
mod config;
mod ingest;
mod output;
mod validate;

use clap::{CommandFactory, Parser, Subcommand};
use output::OutputMode;
use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "sr: dependency-aware task prioritizer",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Override the scored-task store location.
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,

    /// Suppress non-essential output.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags.
    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Score and rank a batch of tasks",
        long_about = "Score a JSON task batch and print a prioritized, explained ordering.",
        after_help = "EXAMPLES:\n    # Analyze a payload file\n    sr analyze --file tasks.json\n\n    # Pipe a payload and force a strategy\n    cat tasks.json | sr analyze --strategy fastest_wins\n\n    # Emit machine-readable output\n    sr analyze --file tasks.json --json"
    )]
    Analyze(cmd::analyze::AnalyzeArgs),

    #[command(
        about = "Re-rank recently saved tasks",
        long_about = "Load the most recently saved tasks, re-rank them with smart_balance, and print the top suggestions.",
        after_help = "EXAMPLES:\n    # Top three suggestions from saved history\n    sr suggest\n\n    # Widen the history window\n    sr suggest --window 500 --limit 5\n\n    # Emit machine-readable output\n    sr suggest --json"
    )]
    Suggest(cmd::suggest::SuggestArgs),

    #[command(
        about = "Generate shell completion scripts",
        after_help = "EXAMPLES:\n    # Generate bash completions\n    sr completions bash\n\n    # Generate zsh completions\n    sr completions zsh"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

/// Install the tracing subscriber.
///
/// `STACKRANK_LOG` takes precedence; otherwise `-v`/`DEBUG` raises the
/// default filter to debug and `-q` lowers it to error. Logs go to stderr
/// so stdout stays parseable.
fn init_tracing(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_env("STACKRANK_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "debug"
        } else if quiet {
            "error"
        } else {
            "warn"
        })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    if cli.verbose {
        info!("verbose mode enabled");
    }

    let project_root = std::env::current_dir()?;
    let settings = config::load(&project_root)?;
    let db_path = cli
        .db
        .clone()
        .unwrap_or_else(|| project_root.join(&settings.db_path));
    let output = cli.output_mode();

    match cli.command {
        Commands::Analyze(ref args) => cmd::analyze::run_analyze(args, &settings, &db_path, output),
        Commands::Suggest(ref args) => cmd::suggest::run_suggest(args, &db_path, output),
        Commands::Completions(ref args) => {
            cmd::completions::run_completions(args, &mut Cli::command());
            Ok(())
        }
    }
}
