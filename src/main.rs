//! Authentication + CSRF gateway.
//!
//! A demonstration web service with two authenticated endpoints behind
//! an explicit gate pipeline:
//!
//! ```text
//! request → route policy → auth gate (Basic) → csrf gate → handler
//! ```
//!
//! - `GET /user` echoes the authenticated principal
//! - `GET /resource` returns a greeting with a fresh UUID
//! - `POST /logout` destroys the session (auth + CSRF token required)
//! - `/`, `/index.html`, `/home.html`, `/login.html` are permit-all

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use auth_gateway::config::{self, GatewayConfig};
use auth_gateway::observability;
use auth_gateway::{HttpServer, Shutdown};

#[derive(Parser, Debug)]
#[command(name = "auth-gateway", version, about = "Basic-auth + CSRF gateway demo")]
struct Args {
    /// Path to a TOML configuration file. Demo defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auth_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    tracing::info!("auth-gateway v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => GatewayConfig::demo(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        users = config.users.len(),
        routes = config.routes.len(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => observability::metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(address = %local_addr, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
