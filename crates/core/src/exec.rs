//! Step execution.
//!
//! Filesystem steps go through `tokio::fs`; `Run` steps go through the
//! [`Runner`] seam so tests can substitute a recording double for real
//! child processes. Steps within a phase and phases within a plan run
//! strictly in order, and the first failed step aborts everything after
//! it.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::error::Error;
use crate::step::{Phase, Plan, Step, StepKind};

/// Exit status of a finished child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecStatus {
  /// Exit code; `None` when the child was terminated by a signal.
  pub code: Option<i32>,
}

impl ExecStatus {
  pub fn success(self) -> bool {
    self.code == Some(0)
  }
}

/// Seam between the orchestrator and the operating system.
#[allow(async_fn_in_trait)]
pub trait Runner {
  /// Run `program` with `args` inside `cwd`, waiting for it to exit.
  async fn run(&self, program: &Path, args: &[PathBuf], cwd: &Path) -> std::io::Result<ExecStatus>;
}

/// Production runner: spawns real child processes with inherited stdio,
/// so tool output streams straight through to the user.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl Runner for ProcessRunner {
  async fn run(&self, program: &Path, args: &[PathBuf], cwd: &Path) -> std::io::Result<ExecStatus> {
    debug!(program = %program.display(), cwd = %cwd.display(), "spawning process");

    let status = tokio::process::Command::new(program)
      .args(args)
      .current_dir(cwd)
      .status()
      .await?;

    Ok(ExecStatus {
      code: status.code(),
    })
  }
}

/// Outcome of a fully executed plan.
#[derive(Debug)]
pub struct PlanReport {
  /// Steps that ran to completion.
  pub steps_run: usize,
  /// Wall-clock time for the whole plan.
  pub elapsed: Duration,
}

/// Execute a single step.
pub async fn execute_step<R: Runner>(step: &Step, runner: &R) -> Result<(), Error> {
  match &step.kind {
    StepKind::CreateDir { path } => {
      info!(step = step.name, path = %path.display(), "creating directory");
      tokio::fs::create_dir_all(path).await.map_err(|e| Error::Filesystem {
        op: "create",
        path: path.clone(),
        source: e,
      })
    }
    StepKind::RemoveDir { path } => {
      info!(step = step.name, path = %path.display(), "removing directory");
      match tokio::fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        // Removing what is already gone is success, not failure.
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::Filesystem {
          op: "remove",
          path: path.clone(),
          source: e,
        }),
      }
    }
    StepKind::Run { program, args, cwd } => {
      info!(step = step.name, program = %program.display(), "running");
      let status = runner.run(program, args, cwd).await.map_err(|e| Error::Spawn {
        step: step.name.to_string(),
        program: program.display().to_string(),
        source: e,
      })?;

      if !status.success() {
        return Err(Error::SubprocessFailed {
          step: step.name.to_string(),
          program: program.display().to_string(),
          code: status.code,
        });
      }

      Ok(())
    }
  }
}

/// Execute one phase's steps in order, stopping at the first failure.
pub async fn execute_phase<R: Runner>(phase: &Phase, runner: &R) -> Result<(), Error> {
  info!(banner = %phase.banner, "phase");
  for step in &phase.steps {
    execute_step(step, runner).await?;
  }
  Ok(())
}

/// Execute every phase in order with the same short-circuit rule.
pub async fn execute_plan<R: Runner>(plan: &Plan, runner: &R) -> Result<PlanReport, Error> {
  let start = Instant::now();
  let mut steps_run = 0;

  for phase in &plan.phases {
    execute_phase(phase, runner).await?;
    steps_run += phase.steps.len();
  }

  Ok(PlanReport {
    steps_run,
    elapsed: start.elapsed(),
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::sync::Mutex;
  use tempfile::TempDir;

  use crate::config::Config;
  use crate::layout::Layout;
  use crate::step::{clean_plan, install_plan};

  /// Records every `Run` step and replies with scripted exit codes.
  #[derive(Default)]
  struct RecordingRunner {
    calls: Mutex<Vec<(PathBuf, Vec<PathBuf>, PathBuf)>>,
    /// Fail the nth `Run` call (0-based) with this exit code.
    fail_at: Option<(usize, i32)>,
  }

  impl RecordingRunner {
    fn calls(&self) -> Vec<(PathBuf, Vec<PathBuf>, PathBuf)> {
      self.calls.lock().unwrap().clone()
    }

    fn programs(&self) -> Vec<String> {
      self
        .calls()
        .iter()
        .map(|(program, _, _)| program.display().to_string())
        .collect()
    }
  }

  impl Runner for RecordingRunner {
    async fn run(&self, program: &Path, args: &[PathBuf], cwd: &Path) -> std::io::Result<ExecStatus> {
      let mut calls = self.calls.lock().unwrap();
      let index = calls.len();
      calls.push((program.to_path_buf(), args.to_vec(), cwd.to_path_buf()));

      let code = match self.fail_at {
        Some((at, code)) if at == index => code,
        _ => 0,
      };
      Ok(ExecStatus { code: Some(code) })
    }
  }

  fn test_layout(temp: &TempDir) -> Layout {
    let root = temp.path().join("wa-lcs");
    std::fs::create_dir_all(root.join("external/sdsl-lite")).unwrap();
    Layout::resolve(&root, &Config::default()).unwrap()
  }

  #[tokio::test]
  async fn install_call_order_is_invariant() {
    let temp = TempDir::new().unwrap();
    let layout = test_layout(&temp);
    let runner = RecordingRunner::default();

    let plan = install_plan(&layout, &Config::default());
    let report = execute_plan(&plan, &runner).await.unwrap();

    // Installer first, then configure, then the build tool; configure
    // completes before the build tool starts.
    let calls = runner.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[0].0, layout.installer);
    assert_eq!(calls[0].1, vec![layout.install_dir.clone()]);
    assert_eq!(calls[0].2, layout.dep_dir);
    assert_eq!(runner.programs()[1..], ["cmake", "make"]);
    assert_eq!(calls[1].2, layout.build_dir);
    assert_eq!(calls[2].2, layout.build_dir);

    assert_eq!(report.steps_run, 5);
  }

  #[tokio::test]
  async fn install_creates_both_directories() {
    let temp = TempDir::new().unwrap();
    let layout = test_layout(&temp);
    let runner = RecordingRunner::default();

    let plan = install_plan(&layout, &Config::default());
    execute_plan(&plan, &runner).await.unwrap();

    assert!(layout.install_dir.is_dir());
    assert!(layout.build_dir.is_dir());
  }

  #[tokio::test]
  async fn failed_configure_skips_the_build_tool() {
    let temp = TempDir::new().unwrap();
    let layout = test_layout(&temp);
    let runner = RecordingRunner {
      fail_at: Some((1, 5)),
      ..Default::default()
    };

    let plan = install_plan(&layout, &Config::default());
    let err = execute_plan(&plan, &runner).await.unwrap_err();

    assert!(matches!(
      err,
      Error::SubprocessFailed {
        ref step,
        code: Some(5),
        ..
      } if step == "configure"
    ));
    // Short-circuit: the build tool was never invoked.
    let programs = runner.programs();
    assert_eq!(programs.len(), 2);
    assert_eq!(programs[0], layout.installer.display().to_string());
    assert_eq!(programs[1], "cmake");
  }

  #[tokio::test]
  async fn failed_installer_skips_everything_after_it() {
    let temp = TempDir::new().unwrap();
    let layout = test_layout(&temp);
    let runner = RecordingRunner {
      fail_at: Some((0, 1)),
      ..Default::default()
    };

    let plan = install_plan(&layout, &Config::default());
    let err = execute_plan(&plan, &runner).await.unwrap_err();

    assert!(matches!(err, Error::SubprocessFailed { ref step, .. } if step == "run installer"));
    assert_eq!(runner.calls().len(), 1);
    // The build phase never started.
    assert!(!layout.build_dir.exists());
  }

  #[tokio::test]
  async fn subprocess_exit_code_reaches_the_caller() {
    let temp = TempDir::new().unwrap();
    let layout = test_layout(&temp);
    let runner = RecordingRunner {
      fail_at: Some((0, 7)),
      ..Default::default()
    };

    let plan = install_plan(&layout, &Config::default());
    let err = execute_plan(&plan, &runner).await.unwrap_err();
    assert_eq!(err.exit_code(), 7);
  }

  #[tokio::test]
  async fn clean_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let layout = test_layout(&temp);
    std::fs::create_dir_all(&layout.install_dir).unwrap();
    std::fs::create_dir_all(&layout.build_dir).unwrap();
    let runner = RecordingRunner::default();

    let plan = clean_plan(&layout);
    execute_plan(&plan, &runner).await.unwrap();
    assert!(!layout.install_dir.exists());
    assert!(!layout.build_dir.exists());

    // Second run removes nothing and still succeeds.
    execute_plan(&plan, &runner).await.unwrap();
    assert!(runner.calls().is_empty(), "clean spawns no processes");
  }

  #[tokio::test]
  async fn create_dir_succeeds_when_already_present() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("dir");
    std::fs::create_dir_all(&path).unwrap();

    let step = Step {
      name: "create build dir",
      kind: StepKind::CreateDir { path: path.clone() },
    };
    execute_step(&step, &RecordingRunner::default()).await.unwrap();
    assert!(path.is_dir());
  }

  #[cfg(unix)]
  #[tokio::test]
  async fn process_runner_reports_real_exit_codes() {
    let temp = TempDir::new().unwrap();
    let runner = ProcessRunner;

    let ok = runner
      .run(Path::new("/bin/sh"), &["-c".into(), "exit 0".into()], temp.path())
      .await
      .unwrap();
    assert!(ok.success());

    let failed = runner
      .run(Path::new("/bin/sh"), &["-c".into(), "exit 3".into()], temp.path())
      .await
      .unwrap();
    assert_eq!(failed.code, Some(3));
    assert!(!failed.success());
  }

  #[cfg(unix)]
  #[tokio::test]
  async fn missing_program_is_a_spawn_error() {
    let temp = TempDir::new().unwrap();
    let step = Step {
      name: "run installer",
      kind: StepKind::Run {
        program: temp.path().join("does-not-exist.sh"),
        args: vec![],
        cwd: temp.path().to_path_buf(),
      },
    };

    let err = execute_step(&step, &ProcessRunner).await.unwrap_err();
    assert!(matches!(err, Error::Spawn { ref step, .. } if step == "run installer"));
  }
}
