//! flutter-hooks - Cross-platform Flutter/Dart tooling for pre-commit hooks.
//!
//! Runs `format`, `analyze` or `test` through the best available launcher:
//! `fvm` if present, otherwise `dart` or `flutter` directly. The tool's exit
//! code becomes the process exit code; 127 means no tool could be run.
//!
//! # Modules
//!
//! - [`cli`] - Argument parsing and command dispatch
//! - [`error`] - Error types and result aliases
//! - [`shell`] - Child process execution
//! - [`tools`] - Candidate tables and search-path resolution
//! - [`ui`] - Styled diagnostics
//!
//! # Example
//!
//! ```
//! use flutter_hooks::cli::HookCommand;
//! use flutter_hooks::tools::candidates;
//!
//! let preferred = candidates(HookCommand::Analyze)[0];
//! assert_eq!(preferred.to_string(), "fvm flutter analyze");
//! ```

pub mod cli;
pub mod error;
pub mod shell;
pub mod tools;
pub mod ui;

pub use error::{HookError, Result};
