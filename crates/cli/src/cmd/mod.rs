//! Per-command implementations for the walcs CLI.

mod clean;
mod install;
mod status;
mod update;

pub use clean::cmd_clean;
pub use install::cmd_install;
pub use status::cmd_status;
pub use update::cmd_update;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use walcs_core::config::{CONFIG_FILE, Config};
use walcs_core::exec::{ProcessRunner, execute_phase};
use walcs_core::layout::Layout;
use walcs_core::step::Plan;

use crate::output::{self, OutputFormat};

/// Flags shared by every command invocation.
pub struct RunOptions {
  pub project_root: PathBuf,
  pub config: Option<PathBuf>,
  pub dry_run: bool,
  pub verbose: bool,
  pub format: OutputFormat,
}

/// Load the project configuration and resolve the layout.
fn resolve(options: &RunOptions) -> Result<(Config, Layout)> {
  let config_file = match &options.config {
    Some(path) => path.clone(),
    None => options.project_root.join(CONFIG_FILE),
  };
  let config = Config::load(&config_file)?;
  let layout = Layout::resolve(&options.project_root, &config)?;
  Ok((config, layout))
}

/// Print or execute a plan, phase by phase.
///
/// A dry run renders the plan (text or JSON) and executes nothing.
/// Otherwise each phase's banner is printed before its steps run, and
/// the first failed step aborts everything after it.
///
/// Returns the number of steps that ran (0 for a dry run).
fn run_plan(plan: &Plan, options: &RunOptions) -> Result<usize> {
  if options.dry_run {
    if options.format.is_json() {
      output::print_json(plan)?;
    } else {
      output::print_plan(plan);
    }
    return Ok(0);
  }

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
  let runner = ProcessRunner;
  let mut steps_run = 0;
  debug!(phases = plan.phases.len(), steps = plan.step_count(), "executing plan");

  for phase in &plan.phases {
    output::print_banner(&phase.banner);
    if options.verbose {
      for step in &phase.steps {
        output::print_step(step);
      }
    }
    rt.block_on(execute_phase(phase, &runner))?;
    steps_run += phase.steps.len();
  }

  Ok(steps_run)
}
