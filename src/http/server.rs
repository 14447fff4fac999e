//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID, gates)
//! - Bind the server to a listener
//! - Coordinate graceful shutdown
//!
//! # Gate pipeline (outermost first)
//! ```text
//! TraceLayer → request ID → timeout → auth gate → csrf gate → handler
//! ```

use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::GatewayConfig;
use crate::http::handlers;
use crate::http::pages;
use crate::http::request::request_id_middleware;
use crate::routing::RouteTable;
use crate::security::{auth_gate, csrf_gate, UserStore};
use crate::session::SessionStore;

/// Application state injected into handlers and gates.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub routes: Arc<RouteTable>,
    pub users: Arc<UserStore>,
    pub sessions: SessionStore,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    config: Arc<GatewayConfig>,
    sessions: SessionStore,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> Self {
        let config = Arc::new(config);
        let state = AppState {
            routes: Arc::new(RouteTable::from_config(&config.routes)),
            users: Arc::new(UserStore::from_config(&config.users)),
            sessions: SessionStore::new(),
            config: config.clone(),
        };
        let sessions = state.sessions.clone();

        let router = Self::build_router(&config, state);
        Self {
            router,
            config,
            sessions,
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/user", get(handlers::user))
            .route("/resource", get(handlers::resource))
            .route("/logout", post(handlers::logout))
            .route("/", get(pages::index))
            .route("/index.html", get(pages::index))
            .route("/home.html", get(pages::home))
            .route("/login.html", get(pages::login))
            .fallback(handlers::not_found)
            .layer(
                // Outermost first: trace → request ID → timeout → gates.
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(middleware::from_fn(request_id_middleware))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    )))
                    .layer(middleware::from_fn_with_state(state.clone(), auth_gate))
                    .layer(middleware::from_fn_with_state(state.clone(), csrf_gate)),
            )
            .with_state(state)
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Stops on Ctrl+C or when the shutdown channel fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        if self.config.session.sweeper_enabled {
            self.sessions.spawn_sweeper(
                Duration::from_secs(self.config.session.idle_timeout_secs),
                Duration::from_secs(self.config.session.sweep_interval_secs),
                shutdown.resubscribe(),
            );
        }

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Wait for Ctrl+C or a programmatic shutdown trigger.
async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            }
        }
        _ = shutdown.recv() => {}
    }
    tracing::info!("Shutdown signal received");
}
