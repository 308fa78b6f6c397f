//! Command-line interface.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Dispatching a parsed command to a Flutter/Dart tool

pub mod args;
pub mod commands;

pub use args::{Cli, HookCommand};
pub use commands::{CommandDispatcher, CommandResult, Invocation};
