//! Garden Web - JSON API and live events for one garden board.

use anyhow::{Context, Result};
use clap::Parser;
use garden::prelude::*;
use garden_web::{routes, AppState, WebConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "garden-web")]
#[command(about = "Garden Web - JSON API and live events for a garden board")]
struct Cli {
    /// Port to listen on (overrides garden.toml)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (overrides garden.toml)
    #[arg(long)]
    host: Option<String>,

    /// Path to garden.toml (default: search current and parent directories)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut config = WebConfig::load(cli.config.as_deref())?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let session = config
        .board
        .session_builder()
        .context("Failed to load board")?
        .build()
        .context("Failed to build board")?;

    let state = if config.led.enabled {
        info!("Mirroring to LED controller at {}", config.led.base_url());
        let notifier = HttpLedNotifier::new(config.led.clone())?;
        AppState::with_notifier(session, Arc::new(notifier))
    } else {
        AppState::new(session)
    };

    let app = routes::create_router(state);

    let addr = config.addr();
    println!("Starting Garden Web...");
    println!("API at http://{}/api/board", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
