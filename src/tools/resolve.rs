//! Executable resolution on the search path.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Maps an executable name to its absolute path.
///
/// Implementations must look the name up on every call. The search path can
/// change between hook runs and a stale answer would launch the wrong tool.
pub trait Resolver {
    /// Resolve `program`, returning `None` when it is not found.
    fn resolve(&self, program: &str) -> Option<PathBuf>;
}

/// Resolves names against a search path.
///
/// By default this is the process `PATH`, using the host's lookup rules
/// (including `PATHEXT` on Windows).
#[derive(Debug, Clone, Default)]
pub struct SearchPath {
    dirs: Option<OsString>,
}

impl SearchPath {
    /// Resolve against the current process `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve against an explicit list of directories instead of `PATH`.
    pub fn in_dirs<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let joined = std::env::join_paths(dirs.into_iter().map(|d| d.as_ref().to_path_buf()))
            .unwrap_or_default();
        Self { dirs: Some(joined) }
    }
}

impl Resolver for SearchPath {
    fn resolve(&self, program: &str) -> Option<PathBuf> {
        let found = match &self.dirs {
            None => which::which(program),
            Some(dirs) => {
                let cwd = std::env::current_dir().unwrap_or_default();
                which::which_in(program, Some(dirs), cwd)
            }
        };

        match found {
            Ok(path) => {
                tracing::debug!("Resolved {} -> {}", program, path.display());
                Some(path)
            }
            Err(e) => {
                tracing::debug!("{} not found on search path: {}", program, e);
                None
            }
        }
    }
}
