//! Command dispatch.
//!
//! Every command follows the same shape: pick the first tool candidate that
//! resolves on the search path, run it, and adopt its exit code. The
//! per-command differences live in [`crate::tools::candidates`].

pub mod dispatcher;

pub use dispatcher::{CommandDispatcher, CommandResult, Invocation};
