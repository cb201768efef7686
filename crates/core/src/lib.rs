//! walcs-core: build lifecycle orchestration for the Wheeler-automaton LCS tree
//!
//! This crate provides the pieces the `walcs` binary is assembled from:
//! - `Command`: the closed set of lifecycle commands, parsed from a selector
//! - `Config` / `Layout`: project configuration and absolute path resolution
//! - `Plan`: the ordered phases and steps a command expands to
//! - `exec`: step execution over the `Runner` subprocess seam

pub mod command;
pub mod config;
pub mod error;
pub mod exec;
pub mod layout;
pub mod status;
pub mod step;

pub use command::Command;
pub use config::Config;
pub use error::Error;
pub use layout::Layout;
