//! CLI module
//!
//! Provides the command-line interface:
//! - serve: Boot the record store and enter the HTTP serving loop
//! - config: Print the effective configuration

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command};
pub use errors::{CliError, CliResult};
