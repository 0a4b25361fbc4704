//! HTTP host: storage, service and router wiring plus the serve/shutdown lifecycle.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use coupons::api::rest::register_routes;
use coupons::domain::service::CouponService;
use coupons::infra::build_storage;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::shutdown;

#[must_use]
pub fn build_router(service: Arc<CouponService>) -> Router {
    register_routes(Router::new(), service).layer(TraceLayer::new_for_http())
}

/// Binds the configured address and serves until a shutdown signal arrives
/// or `server.max_uptime` elapses.
///
/// # Errors
/// Returns an error if the address cannot be bound or the server fails.
pub async fn run_server(config: AppConfig) -> Result<()> {
    let cancel = CancellationToken::new();
    tokio::spawn(shutdown::cancel_on_shutdown(
        cancel.clone(),
        config.server.max_uptime,
    ));

    let listener = TcpListener::bind(config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;

    serve(listener, &config, &cancel).await
}

/// Serves on an already bound listener until `cancel` fires.
///
/// In-flight requests get `server.shutdown_timeout` to finish; storage is
/// closed once the server has stopped.
///
/// # Errors
/// Returns an error if the server task fails.
pub async fn serve(listener: TcpListener, config: &AppConfig, cancel: &CancellationToken) -> Result<()> {
    let storage = build_storage(&config.coupons);
    let service = Arc::new(CouponService::new(storage.repository()));
    let router = build_router(service);

    let addr = listener.local_addr()?;
    tracing::info!(%addr, "HTTP server bound");

    let shutdown = {
        let cancel = cancel.clone();
        async move {
            cancel.cancelled().await;
            tracing::info!("HTTP server shutting down gracefully");
        }
    };

    let mut server = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
    });

    let grace = config.server.shutdown_timeout;
    let outcome = tokio::select! {
        res = &mut server => res,
        () = cancel.cancelled() => match tokio::time::timeout(grace, &mut server).await {
            Ok(res) => res,
            Err(_) => {
                tracing::warn!(?grace, "Shutdown timeout elapsed, dropping in-flight requests");
                server.abort();
                Ok(Ok(()))
            }
        },
    };

    storage.close();
    tracing::info!("HTTP server stopped");

    outcome
        .context("HTTP server task failed")?
        .context("HTTP server error")
}
