//! nanosysinfo - prints a host status report, or serves it over HTTP with `-d`.

use anyhow::Result;
use clap::Parser;
use nanosysinfo::cli::Cli;
use nanosysinfo::{render_terminal, server, AppState, LiveProbe};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so the report on stdout stays clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if cli.daemon {
        let config = cli.server_config();
        println!("Starting nanosysinfo HTTP server on port {}...", config.port);
        info!("nanosysinfo v{} starting", env!("CARGO_PKG_VERSION"));
        return server::run(config, AppState::live()).await;
    }

    let report = tokio::task::spawn_blocking(|| render_terminal(&LiveProbe)).await?;
    println!("{}", report);
    Ok(())
}
