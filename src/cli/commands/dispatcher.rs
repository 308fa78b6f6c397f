//! Command dispatching.
//!
//! This module provides:
//! - [`Invocation`] for the candidate chosen to run
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing a [`HookCommand`] to its tool

use std::path::PathBuf;

use crate::cli::args::HookCommand;
use crate::error::{HookError, Result};
use crate::shell::run_inherited;
use crate::tools::{candidates, not_found_message, Resolver, SearchPath, ToolCandidate};

/// A candidate whose launcher was found, ready to spawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The candidate that resolved.
    pub candidate: ToolCandidate,

    /// Absolute path of the launcher.
    pub program: PathBuf,
}

impl Invocation {
    /// Arguments passed to the launcher.
    pub fn args(&self) -> Vec<&'static str> {
        self.candidate.argv()
    }
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the tool reported success.
    pub success: bool,

    /// Exit code to terminate with, taken verbatim from the tool.
    pub exit_code: i32,
}

impl CommandResult {
    /// Build a result from a tool's exit code.
    pub fn from_exit_code(exit_code: i32) -> Self {
        Self {
            success: exit_code == 0,
            exit_code,
        }
    }
}

/// Dispatches hook commands to the best available Flutter/Dart tool.
pub struct CommandDispatcher<R = SearchPath> {
    resolver: R,
}

impl CommandDispatcher<SearchPath> {
    /// Create a dispatcher that resolves tools on the process `PATH`.
    pub fn new() -> Self {
        Self::with_resolver(SearchPath::new())
    }
}

impl Default for CommandDispatcher<SearchPath> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resolver> CommandDispatcher<R> {
    /// Create a dispatcher with a custom resolver.
    pub fn with_resolver(resolver: R) -> Self {
        Self { resolver }
    }

    /// Pick the first candidate for `command` whose launcher resolves.
    ///
    /// Lookups stop at the first hit; lower-priority launchers are never
    /// queried once one is found.
    pub fn select(&self, command: HookCommand) -> Option<Invocation> {
        candidates(command).iter().find_map(|candidate| {
            self.resolver
                .resolve(candidate.program)
                .map(|program| Invocation {
                    candidate: *candidate,
                    program,
                })
        })
    }

    /// Dispatch and execute a command.
    ///
    /// Exactly one tool is launched. If it cannot be spawned the error is
    /// returned without trying the remaining candidates.
    pub fn dispatch(&self, command: HookCommand) -> Result<CommandResult> {
        let Some(invocation) = self.select(command) else {
            let searched = unique_programs(command);
            tracing::debug!("No tool found for {} (searched {:?})", command, searched);
            return Err(HookError::ToolNotFound {
                command: command.to_string(),
                searched,
                message: not_found_message(command).to_string(),
            });
        };

        tracing::debug!(
            "Running {} via {}",
            invocation.candidate,
            invocation.program.display()
        );

        let exit_code = run_inherited(&invocation.program, invocation.args())?;
        Ok(CommandResult::from_exit_code(exit_code))
    }
}

fn unique_programs(command: HookCommand) -> Vec<String> {
    let mut programs: Vec<String> = Vec::new();
    for candidate in candidates(command) {
        if !programs.iter().any(|p| p == candidate.program) {
            programs.push(candidate.program.to_string());
        }
    }
    programs
}
