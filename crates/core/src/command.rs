//! Lifecycle command selection.
//!
//! The CLI takes a single selector argument. Parsing is an explicit step
//! with a closed set of outcomes: every input maps to a `Command` variant
//! or to `Error::UnknownCommand`. There is no silent fallthrough.

use crate::error::Error;

/// A lifecycle command, chosen by the selector argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
  /// Install the vendored dependency, then configure and build the project.
  Install,
  /// Remove the dependency install directory and the build directory.
  Clean,
  /// Re-run the build tool in the existing build directory.
  Update,
  /// Report which lifecycle directories currently exist.
  Status,
}

impl Command {
  /// Parse a selector string.
  ///
  /// Exactly the lowercase selectors are accepted; no prefix matching,
  /// no case folding.
  pub fn from_selector(selector: &str) -> Result<Self, Error> {
    match selector {
      "install" => Ok(Command::Install),
      "clean" => Ok(Command::Clean),
      "update" => Ok(Command::Update),
      "status" => Ok(Command::Status),
      other => Err(Error::UnknownCommand(other.to_string())),
    }
  }

  /// The selector that names this command.
  pub fn selector(self) -> &'static str {
    match self {
      Command::Install => "install",
      Command::Clean => "clean",
      Command::Update => "update",
      Command::Status => "status",
    }
  }
}
