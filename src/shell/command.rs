//! Launching a resolved tool with inherited stdio.

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use crate::error::{HookError, Result};

/// Run `program` with `args`, blocking until it exits.
///
/// Working directory, environment and all three standard streams are
/// inherited, so the tool's output reaches the terminal unfiltered.
/// Returns the exit code the caller should adopt.
pub fn run_inherited<I, S>(program: &Path, args: I) -> Result<i32>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let mut child = cmd.spawn().map_err(|source| HookError::SpawnFailed {
        program: program.to_path_buf(),
        source,
    })?;

    let status = child.wait()?;
    let code = exit_code_of(status);
    tracing::debug!("{} exited with {} ({})", program.display(), code, status);
    Ok(code)
}

/// Exit code for a finished child.
///
/// A child killed by a signal has no exit code; report `128 + signal` the
/// way POSIX shells do.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
