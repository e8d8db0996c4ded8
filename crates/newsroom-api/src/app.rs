//! Application builder: wires router, middleware and state into an Axum app
//! and runs it.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::middleware as axum_middleware;
use tokio::sync::watch;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use newsroom_auth::OtpSweeper;
use newsroom_core::config::{AppConfig, DatabaseProvider};
use newsroom_core::error::AppError;
use newsroom_core::traits::SystemClock;
use newsroom_database::{AdminStore, DatabasePool, MemoryAdminStore};

use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);

    build_router(state)
        .layer(TimeoutLayer::new(timeout))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(request_logging))
}

/// Runs the Newsroom server until Ctrl+C or SIGTERM.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(environment = %config.environment, "Starting Newsroom server...");

    // ── Step 1: Credential store ─────────────────────────────────
    let (admin_store, db_pool): (Arc<dyn AdminStore>, Option<DatabasePool>) =
        match config.database.provider {
            DatabaseProvider::Postgres => {
                let pool = DatabasePool::connect(&config.database).await?;
                pool.health_check().await?;
                pool.migrate().await?;
                (Arc::new(pool.admin_repository()), Some(pool))
            }
            DatabaseProvider::Memory => {
                tracing::warn!("Using in-memory credential store; admins are lost on restart");
                (Arc::new(MemoryAdminStore::new()), None)
            }
        };

    // ── Step 2: Owner mail transport ─────────────────────────────
    let notifier = newsroom_notify::build_notifier(&config.mail)?;
    tracing::info!(transport = ?config.mail.transport, "Mail transport ready");

    // ── Step 3: Application state ────────────────────────────────
    let sweep_interval = config.otp.sweep_interval();
    let shutdown_grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, admin_store, notifier, Arc::new(SystemClock));

    // ── Step 4: Shutdown channel & OTP sweeper ───────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let sweeper =
        OtpSweeper::new(state.otp_ledger.clone(), sweep_interval).spawn(shutdown_rx.clone());

    // ── Step 5: Build and start HTTP server ──────────────────────
    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Newsroom server listening on {}", addr);

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    });

    let served = server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")));

    // ── Step 6: Drain background tasks ───────────────────────────
    if tokio::time::timeout(shutdown_grace, sweeper).await.is_err() {
        tracing::warn!("OTP sweeper did not stop within the grace period");
    }
    if let Some(pool) = db_pool {
        pool.close().await;
    }

    tracing::info!("Newsroom server stopped");
    served
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
