use anyhow::Context;
use coursebyte::logging::init_tracing;
use coursebyte::router::init_router;
use coursebyte::state::init_app_state;
use coursebyte_config::{DatabaseConfig, ServerConfig};
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let database = DatabaseConfig::from_env();
    let server = ServerConfig::from_env();

    let state = init_app_state(&database)
        .await
        .context("failed to initialize course store")?;
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(&server.addr)
        .await
        .with_context(|| format!("failed to bind {}", server.addr))?;
    info!(addr = %server.addr, backend = %database.backend, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
