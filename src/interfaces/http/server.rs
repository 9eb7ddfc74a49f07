//! HTTP server lifecycle: serving, signal handling and graceful shutdown.

use axum::Router;
use std::future::{Future, IntoFuture};
use std::io;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::broadcast;
use tracing::{error, info, warn};

/// Serves `router` on `listener` until `shutdown` resolves.
///
/// Once `shutdown` fires the server stops accepting connections and in-flight
/// requests get up to `grace` to finish before the server stops waiting.
pub async fn serve<F>(
    listener: TcpListener,
    router: Router,
    shutdown: F,
    grace: Duration,
) -> io::Result<()>
where
    F: Future<Output = ()>,
{
    let (shutdown_tx, mut shutdown_rx) = broadcast::channel::<()>(1);

    let server = axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
        })
        .into_future();
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => return result,
        () = shutdown => {
            info!("Shutdown signal received, draining connections");
            let _ = shutdown_tx.send(());
        }
    }

    match tokio::time::timeout(grace, server).await {
        Ok(result) => {
            info!("HTTP server shutdown complete");
            result
        }
        Err(_) => {
            warn!(?grace, "Graceful shutdown timed out, dropping open connections");
            Ok(())
        }
    }
}

/// Waits for Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
