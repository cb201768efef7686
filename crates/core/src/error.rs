//! Error taxonomy for lifecycle orchestration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while dispatching or running a lifecycle command.
#[derive(Debug, Error)]
pub enum Error {
  /// The selector did not name a known command.
  #[error("unknown command '{0}' (expected install, clean, update, or status)")]
  UnknownCommand(String),

  /// A step's child process exited with a non-zero status.
  ///
  /// `code` is `None` when the child was terminated by a signal.
  #[error("step '{step}' failed with exit code {code:?}: {program}")]
  SubprocessFailed {
    step: String,
    program: String,
    code: Option<i32>,
  },

  /// A step's child process could not be launched at all.
  #[error("step '{step}' could not launch {program}: {source}")]
  Spawn {
    step: String,
    program: String,
    source: std::io::Error,
  },

  /// A directory operation or path resolution failed.
  #[error("failed to {op} {}: {source}", path.display())]
  Filesystem {
    op: &'static str,
    path: PathBuf,
    source: std::io::Error,
  },

  /// `update` was requested but no build directory exists yet.
  #[error("build directory not found: {} (run 'install' first)", path.display())]
  BuildDirMissing { path: PathBuf },

  /// The project configuration file exists but could not be read or parsed.
  #[error("invalid config {}: {message}", path.display())]
  Config { path: PathBuf, message: String },
}

impl Error {
  /// Process exit code for this error.
  ///
  /// The first failing subprocess's own status is propagated. An unknown
  /// selector is a usage error; everything else is a generic failure.
  pub fn exit_code(&self) -> i32 {
    match self {
      Error::SubprocessFailed { code: Some(code), .. } => *code,
      Error::UnknownCommand(_) => 2,
      _ => 1,
    }
  }
}
