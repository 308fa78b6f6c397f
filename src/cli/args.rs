//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, ValueEnum};

/// Cross-platform Flutter/Dart hooks.
#[derive(Debug, Parser)]
#[command(name = "flutter-hooks")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Command to run
    #[arg(value_enum)]
    pub command: HookCommand,
}

/// Tool commands a hook can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum HookCommand {
    /// Check formatting with `dart format`
    Format,

    /// Run `flutter analyze`
    Analyze,

    /// Run `flutter test`
    Test,
}

impl HookCommand {
    /// Name as typed on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            HookCommand::Format => "format",
            HookCommand::Analyze => "analyze",
            HookCommand::Test => "test",
        }
    }
}

impl std::fmt::Display for HookCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
