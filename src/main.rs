//! edgefn binary entry point.
//!
//! Two subcommands over the same dispatch pipeline:
//! - `serve`  — long-lived HTTP server (the default)
//! - `invoke` — one invocation: request JSON on stdin, response on stdout

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use edgefn::config::{self, FunctionConfig};
use edgefn::dispatch::RouteTable;
use edgefn::http::HttpServer;
use edgefn::invoke;
use edgefn::observability::logging::{init_logging, LogTarget};
use edgefn::observability::metrics;

#[derive(Parser)]
#[command(name = "edgefn")]
#[command(version, about = "Dual-mode HTTP function adapter", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the long-lived HTTP server.
    Serve,
    /// Handle one invocation: request JSON on stdin, response JSON on stdout.
    Invoke,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Serve);

    // One-shot mode owns stdout, so its logs go to stderr.
    match command {
        Command::Serve => init_logging(LogTarget::Stdout),
        Command::Invoke => init_logging(LogTarget::Stderr),
    }

    let config = config::load_or_default(cli.config.as_deref())?;

    match command {
        Command::Serve => serve(config).await,
        Command::Invoke => {
            let routes = RouteTable::from_config(&config);
            invoke::run(&routes)?;
            Ok(())
        }
    }
}

async fn serve(config: FunctionConfig) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("edgefn v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        service_name = %config.function.service_name,
        route_prefix = %config.function.route_prefix,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
