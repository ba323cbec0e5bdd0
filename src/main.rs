//! Library API server: loads settings, opens the pool, serves until Ctrl-C or SIGTERM.

use library_api::{build_router, telemetry, AppState, PgExecutor, QueryExecutor, Settings};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing();
    telemetry::install_panic_hook();

    let settings = Settings::from_env()?;
    let executor = PgExecutor::connect_lazy(&settings.database)?;
    let state = AppState::new(executor.clone());
    let app = build_router(state)?;

    let listener = TcpListener::bind(settings.listen_addr()).await?;
    tracing::info!("Server running on port {}", listener.local_addr()?.port());
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    executor.close().await;
    tracing::info!("connection pool closed");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
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
    tracing::info!("shutdown signal received");
}
