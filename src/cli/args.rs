//! CLI argument definitions using clap
//!
//! Commands:
//! - ordin serve [--host <addr>] [--port <port>] [--page-size <n>] [--seed <n>]
//! - ordin config

use clap::{Parser, Subcommand};

/// ordin - a strict, deterministic list-ordering service
#[derive(Parser, Debug)]
#[command(name = "ordin")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = 8000)]
        port: u16,

        /// Rows per list page
        #[arg(long, default_value_t = 12)]
        page_size: usize,

        /// Number of records to seed the store with at boot
        #[arg(long, default_value_t = 0)]
        seed: usize,
    },

    /// Print the effective configuration and exit
    Config,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
