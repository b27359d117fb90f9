//! Serving and the shutdown sequence.

use crate::{constants::SHUTDOWN_GRACE, persistence, scheduler::Scheduler, store::Board};
use axum::Router;
use std::{future::Future, net::SocketAddr, path::Path, time::Duration};
use tokio::{net::TcpListener, sync::oneshot};
use tracing::{error, info, warn};

/// Serve `router` until `shutdown` resolves, then wind down.
///
/// On shutdown the listener stops accepting, in-flight requests get
/// `SHUTDOWN_GRACE` to finish before the server is aborted, the maintenance
/// tasks are stopped, and the board is saved to `posts_file`.
pub async fn run(
    listener: TcpListener,
    router: Router,
    shutdown: impl Future<Output = ()>,
    board: &Board,
    scheduler: Scheduler,
    posts_file: &Path,
) {
    run_with_grace(listener, router, shutdown, board, scheduler, posts_file, SHUTDOWN_GRACE).await
}

pub async fn run_with_grace(
    listener: TcpListener,
    router: Router,
    shutdown: impl Future<Output = ()>,
    board: &Board,
    scheduler: Scheduler,
    posts_file: &Path,
    grace: Duration,
) {
    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let mut server = tokio::spawn(async move {
        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(async move {
            stop_rx.await.ok();
        })
        .await
    });

    tokio::select! {
        result = &mut server => match result {
            Ok(Ok(())) => warn!("Server stopped unexpectedly"),
            Ok(Err(e)) => error!("Server error: {}", e),
            Err(e) => error!("Server task failed: {}", e),
        },
        _ = shutdown => {
            let _ = stop_tx.send(());
            match tokio::time::timeout(grace, &mut server).await {
                Ok(_) => info!("Drained in-flight requests"),
                Err(_) => {
                    warn!("Requests still running after {:?}, forcing shutdown", grace);
                    server.abort();
                }
            }
        }
    }

    scheduler.shutdown().await;
    persistence::persist(board, posts_file);
}
