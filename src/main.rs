use bbs::{
    AppState, app,
    audit::AuditLog,
    config::Config,
    persistence,
    scheduler::Scheduler,
    server,
    store::Board,
};
use std::sync::Arc;
use tokio::signal::{self, ctrl_c};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;
    let addr = config.bind_addr()?;

    // The audit log is the one thing we refuse to start without
    let (audit, audit_writer) = AuditLog::open(config.posts_log()).await?;

    let board = Arc::new(Board::new(audit));
    persistence::restore(&board, config.posts_file());

    let scheduler = Scheduler::start(board.clone());

    let state = AppState::new(board.clone());
    let router = app(state, config.static_dir());

    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET    /          - Feed");
    info!("  POST   /          - Submit a post (form field `content`)");
    info!("  GET    /health    - Health check");
    info!("  GET    /static/*  - Static assets");

    server::run(
        listener,
        router,
        shutdown_signal(),
        &board,
        scheduler,
        config.posts_file(),
    )
    .await;

    board.close_audit_log();
    audit_writer.finish().await;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install terminate handler: {}", e);
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
}
