//! Child process execution.

pub mod command;

pub use command::{exit_code_of, run_inherited};
