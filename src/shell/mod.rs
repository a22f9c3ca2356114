//! Child process execution and platform detection.

pub mod command;
pub mod platform;

pub use command::{execute, CommandResult, Invocation};
pub use platform::{default_python, is_ci};
