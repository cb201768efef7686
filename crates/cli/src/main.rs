//! CLI entry point for walcs.
//!
//! Parses the single selector argument plus flags, dispatches to the
//! per-command modules, and maps errors to process exit codes. The
//! first failing subprocess's status becomes the walcs exit status.

mod cmd;
mod output;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use walcs_core::{Command, Error};

use crate::output::OutputFormat;

/// walcs - build lifecycle driver for the Wheeler-automaton LCS tree
#[derive(Parser)]
#[command(name = "walcs")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Lifecycle command: install, clean, update, or status
  #[arg(value_name = "COMMAND")]
  selector: String,

  /// Project root to operate on
  #[arg(short = 'C', long, default_value = ".", value_name = "PATH")]
  project_root: PathBuf,

  /// Config file (default: <project-root>/walcs.toml)
  #[arg(long, value_name = "PATH")]
  config: Option<PathBuf>,

  /// Print the plan without executing it
  #[arg(short = 'n', long)]
  dry_run: bool,

  /// Also print individual steps as they run
  #[arg(short, long)]
  verbose: bool,

  /// Output format for status and dry-run plans
  #[arg(long, value_enum, default_value = "text")]
  format: OutputFormat,
}

fn main() {
  // Initialize logging
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .without_time()
    .init();

  let cli = Cli::parse();

  let run = cmd::RunOptions {
    project_root: cli.project_root,
    config: cli.config,
    dry_run: cli.dry_run,
    verbose: cli.verbose,
    format: cli.format,
  };

  let result = match Command::from_selector(&cli.selector) {
    Ok(Command::Install) => cmd::cmd_install(&run),
    Ok(Command::Clean) => cmd::cmd_clean(&run),
    Ok(Command::Update) => cmd::cmd_update(&run),
    Ok(Command::Status) => cmd::cmd_status(&run),
    Err(err) => Err(err.into()),
  };

  if let Err(err) = result {
    output::print_error(&format!("{err:#}"));
    process::exit(exit_code(&err));
  }
}

/// Map an error to the process exit code, propagating subprocess statuses.
fn exit_code(err: &anyhow::Error) -> i32 {
  err.downcast_ref::<Error>().map(Error::exit_code).unwrap_or(1)
}
