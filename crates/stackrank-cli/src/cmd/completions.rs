use clap::{Args, Command};
use clap_complete::{Shell, generate};

/// Arguments for `sr completions`.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum)]
    shell: Shell,
}

/// Execute `sr completions`, writing the script to stdout.
pub fn run_completions(args: &CompletionsArgs, cmd: &mut Command) {
    generate(args.shell, cmd, "sr", &mut std::io::stdout());
}
