use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::AppState;
use service::{contact::notifier, runtime, store::Store};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Assemble the application from config. No database work happens here;
/// the store connects on the first request that needs it.
pub fn build_app(cfg: &AppConfig) -> Router {
    let store = Store::lazy(cfg.database.clone());
    let state = AppState::new(store, notifier::from_config(&cfg.mail));
    routes::build_router(state, build_cors(), &cfg.server.frontend_dir)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl_c");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Public entry: build the app and run the HTTP server until ctrl_c
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    runtime::ensure_env(&cfg.server.frontend_dir).await?;

    let app = build_app(&cfg);

    let addr = bind_addr(&cfg)?;
    info!(%addr, frontend = %cfg.server.frontend_dir, "starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}
