//! Themewright Web Server Binary
//!
//! This binary starts the Themewright web server that provides a REST API
//! for the web-based template editor.
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings (port from config, in-memory store)
//! themewright-web
//!
//! # Persist templates to a JSON file
//! themewright-web --port 8080 --data ~/themes/store.json
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use themewright::config::Config;
use themewright::services::{FileStore, MemoryStore, TemplateStore};
use themewright::web;

/// Themewright Web Server - REST API for the template editor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (defaults to server.port from the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (defaults to server.host from the config file)
    #[arg(long)]
    host: Option<String>,

    /// JSON file to store templates in. Templates are kept in memory only
    /// when omitted.
    #[arg(short, long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Configuration file (defaults to the platform config file)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load or create configuration
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_default(),
    };
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }
    config.validate()?;

    let store: Arc<dyn TemplateStore> = match &args.data {
        Some(path) => Arc::new(
            FileStore::open(path)
                .with_context(|| format!("Failed to open store: {}", path.display()))?,
        ),
        None => {
            info!("No --data file given, templates are kept in memory");
            Arc::new(MemoryStore::new())
        }
    };

    // Build socket address
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid bind address")?;

    // Start the server
    web::run_server(config, store, addr).await
}
