//! CLI output formatting utilities.
//!
//! Phase banners and status lines go to stdout; errors go to stderr.
//! Colors degrade gracefully when the stream is not a terminal.

use std::time::Duration;

use anyhow::Context;
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream};

use walcs_core::step::{Plan, Step, StepKind};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

impl OutputFormat {
  pub fn is_json(self) -> bool {
    matches!(self, OutputFormat::Json)
  }
}

pub mod symbols {
  pub const SUCCESS: &str = "✓";
  pub const ERROR: &str = "✗";
  pub const INFO: &str = "•";
  pub const ARROW: &str = "→";
  pub const PHASE: &str = "::";
}

pub fn format_duration(duration: Duration) -> String {
  let secs = duration.as_secs();
  let millis = duration.subsec_millis();

  if secs >= 60 {
    let mins = secs / 60;
    let remaining_secs = secs % 60;
    format!("{}m {}s", mins, remaining_secs)
  } else if secs > 0 {
    format!("{}.{:02}s", secs, millis / 10)
  } else {
    format!("{}ms", millis)
  }
}

/// One-line description of a step, for verbose and dry-run output.
pub fn describe_step(step: &Step) -> String {
  match &step.kind {
    StepKind::CreateDir { path } | StepKind::RemoveDir { path } => path.display().to_string(),
    StepKind::Run { program, args, cwd } => {
      let mut line = program.display().to_string();
      for arg in args {
        line.push(' ');
        line.push_str(&arg.display().to_string());
      }
      format!("{} (in {})", line, cwd.display())
    }
  }
}

pub fn print_banner(banner: &str) {
  println!(
    "{} {}",
    symbols::PHASE.if_supports_color(Stream::Stdout, |s| s.cyan()),
    banner.if_supports_color(Stream::Stdout, |s| s.bold())
  );
}

pub fn print_step(step: &Step) {
  println!(
    "  {} {} {}",
    symbols::ARROW.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    step.name,
    describe_step(step).if_supports_color(Stream::Stdout, |s| s.dimmed())
  );
}

/// Print a whole plan without executing it.
pub fn print_plan(plan: &Plan) {
  for phase in &plan.phases {
    print_banner(&phase.banner);
    for step in &phase.steps {
      print_step(step);
    }
  }
}

pub fn print_success(message: &str) {
  println!(
    "{} {}",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    message
  );
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_info(message: &str) {
  println!(
    "{} {}",
    symbols::INFO.if_supports_color(Stream::Stdout, |s| s.blue()),
    message
  );
}

pub fn print_stat(label: &str, value: &str) {
  println!(
    "  {}: {}",
    label.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    value
  );
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}
