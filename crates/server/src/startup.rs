use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes::{self, ServerState};
use service::store::MongoStore;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &configs::ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.host, cfg.port).parse()?)
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = configs::AppConfig::load_or_env();

    // One store handle for the process lifetime. Initialization failure
    // degrades the store instead of aborting; `/test` reports the state.
    let store = match MongoStore::connect(&cfg.database.url, &cfg.database.name).await {
        Ok(store) => store,
        Err(e) => {
            warn!(error = %e, "database initialization failed, continuing degraded");
            MongoStore::degraded()
        }
    };
    let state = ServerState { store: Arc::new(store) };

    let cors = build_cors();
    let app: Router = routes::build_router(state, cors);

    let addr = bind_addr(&cfg.server)?;
    info!(%addr, database = %cfg.database.name, "starting api server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
