//! Flutter/Dart tool selection.
//!
//! - [`candidates`] - Ordered launcher tables per command
//! - [`resolve`] - Search-path lookup behind the [`Resolver`] trait

pub mod candidates;
pub mod resolve;

pub use candidates::{candidates, not_found_message, ToolCandidate};
pub use resolve::{Resolver, SearchPath};
