//! Greeting HTTP Server
//!
//! A small HTTP server built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌───────────────────────────────────────────┐
//!                    │              GREETING SERVER              │
//!                    │                                           │
//!   Client Request   │  ┌──────────┐    ┌───────────────────┐   │
//!   ─────────────────┼─▶│   http   │───▶│     routing       │   │
//!                    │  │  server  │    │   (route table)   │   │
//!                    │  └──────────┘    └─────────┬─────────┘   │
//!                    │                            │             │
//!                    │                            ▼             │
//!   Client Response  │  ┌──────────┐    ┌───────────────────┐   │
//!   ◀────────────────┼──│ response │◀───│    greetings      │   │
//!                    │  │  (text)  │    │    (handlers)     │   │
//!                    │  └──────────┘    └───────────────────┘   │
//!                    │                                           │
//!                    │  ┌─────────────────────────────────────┐ │
//!                    │  │        Cross-Cutting Concerns       │ │
//!                    │  │  ┌─────────┐      ┌──────────────┐  │ │
//!                    │  │  │ config  │      │ observability│  │ │
//!                    │  │  └─────────┘      └──────────────┘  │ │
//!                    │  └─────────────────────────────────────┘ │
//!                    └───────────────────────────────────────────┘
//! ```
//!
//! Routes:
//! - `GET /` → `Hello world!`
//! - `GET /hello/:name` → `Hello {name}!`

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use greeting_server::config::{load_config, ServerConfig};
use greeting_server::greetings;
use greeting_server::http::HttpServer;
use greeting_server::observability::logging;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "greeting-server", version, about = "Greeting HTTP server")]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the bind address (e.g., "127.0.0.1:3000").
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration (defaults when no file is given)
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    // Initialize tracing subscriber
    logging::init(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    // Create and run HTTP server
    let server = HttpServer::new(&config, greetings::routes());
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
