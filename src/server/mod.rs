mod context;
mod error;
mod routes;

use std::net::SocketAddr;

use tokio::net::TcpListener;

pub use context::{AppContext, AppState};
pub use error::ApiError;
pub use routes::{LIVENESS_MESSAGE, LivenessResponse, construct_router};

/// Binds `addr` and serves until Ctrl-C.
pub async fn serve(state: AppState, addr: SocketAddr) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, construct_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install Ctrl-C handler: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
