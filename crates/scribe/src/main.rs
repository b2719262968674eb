//! Scribe server binary.
//!
//! Loads configuration, opens the history database, and serves the blog API.

use anyhow::Context;
use clap::Parser;
use scribe::{ScribeConfig, build_app, init_tracing};
use std::path::PathBuf;
use tracing::info;

/// Command-line arguments for the server.
#[derive(Parser, Debug)]
#[command(name = "scribe")]
#[command(about = "Blog-writing API backed by a local LM Studio server")]
#[command(version)]
struct Args {
    /// Path to a configuration file (defaults to ./scribe.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Interface to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to bind
    #[arg(short, long)]
    port: Option<u16>,

    /// Path of the SQLite database file
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Base URL of the inference server
    #[arg(long, env = "LM_STUDIO_URL")]
    inference_url: Option<String>,

    /// Emit JSON log lines
    #[arg(long)]
    json_logs: bool,
}

impl Args {
    fn apply(self, config: &mut ScribeConfig) {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(url) = self.database_url {
            config.database.url = url;
        }
        if let Some(url) = self.inference_url {
            config.inference = config.inference.clone().with_base_url(url);
        }
        if self.json_logs {
            config.log.json = true;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut config = ScribeConfig::load(args.config.as_deref())?;
    args.apply(&mut config);
    config.validate()?;

    init_tracing(&config.log)?;
    info!(version = env!("CARGO_PKG_VERSION"), "Starting Scribe");

    let app = build_app(&config)?;

    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!(
        address = %address,
        inference = %config.inference.base_url(),
        database = %config.database.url,
        "Listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
