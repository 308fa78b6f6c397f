//! Terminal output for the dispatcher's own messages.
//!
//! Tool output is never routed through here; children write straight to
//! the inherited streams.

pub mod theme;

pub use theme::{report_error, should_use_colors, HookTheme};
