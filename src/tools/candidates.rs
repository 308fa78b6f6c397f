//! Per-command candidate tables.
//!
//! Each [`HookCommand`] maps to an ordered list of [`ToolCandidate`]s. The
//! dispatcher walks the list front to back and runs the first one whose
//! launcher resolves on the search path.

use std::fmt;

use crate::cli::HookCommand;

/// Arguments shared by every formatter candidate.
const FORMAT_ARGS: &[&str] = &["format", "-o", "none", "--set-exit-if-changed", "."];

/// An executable name paired with the fixed arguments it is launched with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolCandidate {
    /// Launcher looked up on the search path.
    pub program: &'static str,

    /// Leading arguments inserted before the tool's own arguments, used by
    /// the version manager wrapper (`fvm dart ...`).
    pub prefix: &'static [&'static str],

    /// Arguments passed to the tool.
    pub args: &'static [&'static str],
}

impl ToolCandidate {
    const fn direct(program: &'static str, args: &'static [&'static str]) -> Self {
        Self {
            program,
            prefix: &[],
            args,
        }
    }

    const fn via_fvm(tool: &'static [&'static str], args: &'static [&'static str]) -> Self {
        Self {
            program: "fvm",
            prefix: tool,
            args,
        }
    }

    /// Full argument vector, excluding the program itself.
    pub fn argv(&self) -> Vec<&'static str> {
        self.prefix.iter().chain(self.args).copied().collect()
    }
}

impl fmt::Display for ToolCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in self.argv() {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

const FORMAT: &[ToolCandidate] = &[
    ToolCandidate::via_fvm(&["dart"], FORMAT_ARGS),
    ToolCandidate::direct("dart", FORMAT_ARGS),
    // Older SDKs still ship `flutter format`.
    ToolCandidate::direct("flutter", FORMAT_ARGS),
];

const ANALYZE: &[ToolCandidate] = &[
    ToolCandidate::via_fvm(&["flutter"], &["analyze"]),
    ToolCandidate::direct("flutter", &["analyze"]),
];

const TEST: &[ToolCandidate] = &[
    ToolCandidate::via_fvm(&["flutter"], &["test"]),
    ToolCandidate::direct("flutter", &["test"]),
];

/// Candidates for a command, highest priority first.
pub fn candidates(command: HookCommand) -> &'static [ToolCandidate] {
    match command {
        HookCommand::Format => FORMAT,
        HookCommand::Analyze => ANALYZE,
        HookCommand::Test => TEST,
    }
}

/// Diagnostic printed when none of a command's candidates resolve.
pub fn not_found_message(command: HookCommand) -> &'static str {
    match command {
        HookCommand::Format => "Error: Neither fvm, dart, nor flutter found in PATH",
        HookCommand::Analyze | HookCommand::Test => {
            "Error: flutter not found (and fvm not available)"
        }
    }
}
