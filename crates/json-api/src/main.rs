//! Catalog JSON API Server

use std::process;

use salvo::prelude::*;
use tracing::{error, info};

use catalog_app::context::AppContext;

use crate::{config::ServerConfig, observability::RequestLogging, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod config;
mod cors;
mod errors;
mod extensions;
mod healthcheck;
mod observability;
mod products;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

#[expect(
    clippy::print_stderr,
    reason = "logging not initialized yet, must use eprintln for config errors"
)]
fn report_config_error(error: &dyn std::fmt::Display) {
    eprintln!("Configuration error: {error}");
}

/// Catalog JSON API Server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        report_config_error(&e);

        process::exit(1);
    });

    if let Err(e) = config.validate() {
        report_config_error(&e);

        process::exit(1);
    }

    // Initialize logging
    if let Err(e) = observability::init_subscriber(&config.logging) {
        report_config_error(&e);

        process::exit(1);
    }

    let cors = match cors::cors_handler(&config.cors.allowed_origin) {
        Ok(cors) => cors,
        Err(cors_error) => {
            error!("invalid allowed origin header value: {cors_error}");

            process::exit(1);
        }
    };

    let app = match AppContext::from_database_url(
        &config.database.database_url,
        config.database.database_max_connections,
    )
    .await
    {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let router = router::root_router(
        State::from_app_context(app),
        RequestLogging::new(config.observability.slow_request_threshold_ms),
    );

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router::service(router, cors)).await;

    info!("server stopped");
}
