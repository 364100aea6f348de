//! CLI command implementations
//!
//! `serve` seeds the store, builds the admin state and runs the HTTP server
//! on a fresh tokio runtime until the process is stopped.

use std::sync::Arc;

use crate::admin::ChangeListConfig;
use crate::http_server::{AdminState, HttpServer, HttpServerConfig};
use crate::observability::{log_event, log_event_with_fields, Event};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Execute a parsed command
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            host,
            port,
            page_size,
            seed,
        } => serve(host, port, page_size, seed),
        Command::Config => print_config(),
    }
}

/// Boot the store and serve the admin API
fn serve(host: String, port: u16, page_size: usize, seed: usize) -> CliResult<()> {
    log_event(Event::BootStart);

    let http_config = HttpServerConfig {
        host,
        port,
        ..Default::default()
    };
    let list_config = ChangeListConfig {
        page_size: page_size.max(1),
        ..Default::default()
    };
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("addr", &http_config.socket_addr()),
            ("page_size", &list_config.page_size.to_string()),
        ],
    );

    let state = Arc::new(AdminState::with_config(list_config));
    for i in 0..seed {
        state
            .store
            .insert(format!("Record {}", i + 1))
            .map_err(|e| CliError::boot_failed(format!("Failed to seed store: {}", e)))?;
    }
    if seed > 0 {
        log_event_with_fields(Event::StoreSeeded, &[("records", &seed.to_string())]);
    }

    let server = HttpServer::with_config(http_config, state);
    log_event(Event::BootComplete);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Print the default configuration as JSON
fn print_config() -> CliResult<()> {
    let config = serde_json::json!({
        "http": HttpServerConfig::default(),
        "changelist": ChangeListConfig::default(),
    });
    let rendered = serde_json::to_string_pretty(&config)
        .map_err(|e| CliError::io_error(format!("Failed to render config: {}", e)))?;
    println!("{}", rendered);
    Ok(())
}
