//! Error types for hook dispatch.
//!
//! This module defines [`HookError`], the error type returned by the
//! dispatcher, and a [`Result`] type alias for convenience.
//!
//! Every variant is terminal for the invocation and maps to the
//! [`NOT_FOUND_EXIT_CODE`] sentinel. Invalid command names never get here;
//! clap rejects them during argument parsing.

use std::path::PathBuf;
use thiserror::Error;

/// Exit code reported when no tool could be run, matching the shell's
/// "command not found" status.
pub const NOT_FOUND_EXIT_CODE: i32 = 127;

/// Core error type for hook dispatch.
#[derive(Debug, Error)]
pub enum HookError {
    /// None of the candidate executables resolved on the search path.
    #[error("{message}")]
    ToolNotFound {
        command: String,
        searched: Vec<String>,
        message: String,
    },

    /// A resolved executable could not be launched.
    #[error("Failed to launch {}: {source}", .program.display())]
    SpawnFailed {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HookError {
    /// Exit code the process should terminate with.
    pub fn exit_code(&self) -> i32 {
        NOT_FOUND_EXIT_CODE
    }

    /// Whether this error warrants a diagnostic on stderr.
    ///
    /// Spawn and wait failures are only logged; the missing-tool case is
    /// the one the user has to act on.
    pub fn is_reported(&self) -> bool {
        matches!(self, HookError::ToolNotFound { .. })
    }
}

/// Result type alias for hook operations.
pub type Result<T> = std::result::Result<T, HookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_not_found_displays_message() {
        let err = HookError::ToolNotFound {
            command: "analyze".into(),
            searched: vec!["fvm".into(), "flutter".into()],
            message: "Error: flutter not found (and fvm not available)".into(),
        };
        assert_eq!(
            err.to_string(),
            "Error: flutter not found (and fvm not available)"
        );
        assert!(err.is_reported());
    }

    #[test]
    fn spawn_failed_displays_program() {
        let err = HookError::SpawnFailed {
            program: PathBuf::from("/usr/bin/fvm"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/usr/bin/fvm"));
        assert!(msg.contains("denied"));
        assert!(!err.is_reported());
    }

    #[test]
    fn every_error_exits_127() {
        let errors = [
            HookError::ToolNotFound {
                command: "test".into(),
                searched: vec![],
                message: String::new(),
            },
            HookError::SpawnFailed {
                program: PathBuf::from("flutter"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            },
            HookError::Io(std::io::Error::other("wait failed")),
        ];
        for err in errors {
            assert_eq!(err.exit_code(), 127);
        }
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: HookError = io_err.into();
        assert!(matches!(err, HookError::Io(_)));
    }
}
