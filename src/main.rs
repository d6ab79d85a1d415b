//! Livro de Ponto HTTP server.

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use livro_ponto::api::{api_router, ApiContext};
use livro_ponto::config;
use livro_ponto::store::open_store;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let data_dir = config::app_data_dir();
    std::fs::create_dir_all(&data_dir)?;
    std::fs::create_dir_all(config::uploads_dir())?;

    // Fail fast on an unusable store; per-request opens handle the rest.
    let db_path = config::database_path();
    open_store(&db_path)?;

    let ctx = ApiContext::new(db_path, config::uploads_dir());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = api_router(ctx)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = config::bind_addr();
    tracing::info!("Listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
