//! Command-line interface module
//!
//! Argument structures live in [`args`]; dispatch lives in [`router`].

pub mod args;
pub mod router;

pub use args::{Cli, Commands};
pub use router::execute_command;
