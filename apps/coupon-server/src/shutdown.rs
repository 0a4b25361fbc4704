//! Shutdown triggers for the HTTP host.

use std::time::Duration;

use tokio::signal;
use tokio_util::sync::CancellationToken;

/// What stopped the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    CtrlC,
    Sigterm,
    UptimeElapsed,
    /// The token was cancelled by someone else.
    External,
}

/// Cancels `cancel` on Ctrl+C, SIGTERM or once `max_uptime` has elapsed.
///
/// Returns without touching the token if it is cancelled elsewhere first. A
/// signal handler that cannot be installed is logged and leaves the other
/// triggers armed.
pub async fn cancel_on_shutdown(
    cancel: CancellationToken,
    max_uptime: Option<Duration>,
) -> ShutdownReason {
    let reason = tokio::select! {
        () = cancel.cancelled() => return ShutdownReason::External,
        reason = wait_ctrl_c() => reason,
        reason = wait_sigterm() => reason,
        reason = wait_uptime(max_uptime) => reason,
    };

    tracing::info!(?reason, "Shutdown triggered");
    cancel.cancel();
    reason
}

async fn wait_ctrl_c() -> ShutdownReason {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!(%e, "Error handling Ctrl+C signal");
        std::future::pending::<()>().await;
    }
    ShutdownReason::CtrlC
}

#[cfg(unix)]
async fn wait_sigterm() -> ShutdownReason {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
        Ok(mut handler) => {
            handler.recv().await;
        }
        Err(e) => {
            tracing::error!(%e, "Failed to install SIGTERM handler");
            std::future::pending::<()>().await;
        }
    }
    ShutdownReason::Sigterm
}

#[cfg(not(unix))]
async fn wait_sigterm() -> ShutdownReason {
    std::future::pending().await
}

async fn wait_uptime(max_uptime: Option<Duration>) -> ShutdownReason {
    match max_uptime {
        Some(limit) => {
            tokio::time::sleep(limit).await;
            tracing::info!(?limit, "Maximum uptime reached");
        }
        None => std::future::pending::<()>().await,
    }
    ShutdownReason::UptimeElapsed
}
