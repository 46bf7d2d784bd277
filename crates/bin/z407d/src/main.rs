//! # z407d — Z407 daemon
//!
//! Composition root that connects to the speaker and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Install the `tracing` subscriber
//! - Discover and connect to the speaker over BLE
//! - Construct the remote service and the axum router
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT), then drop the BLE link
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use z407_adapter_ble::Z407Remote;
use z407_adapter_http_axum::state::AppState;
use z407_app::services::remote_service::RemoteService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Speaker
    let remote = match Z407Remote::discover_and_connect(&config.ble).await {
        Ok(remote) => Arc::new(remote),
        Err(err) => {
            tracing::error!(%err, "could not connect to the speaker");
            return Err(err.into());
        }
    };

    // HTTP
    let state = AppState::new(RemoteService::new(Arc::clone(&remote)));
    let app = z407_adapter_http_axum::router::build(state, config.panel.static_dir.as_deref());

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "z407d listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Err(err) = remote.disconnect().await {
        tracing::warn!(%err, "failed to disconnect from the speaker");
    }
    tracing::info!("z407d stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutting down");
}
