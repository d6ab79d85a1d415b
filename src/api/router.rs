//! API router.
//!
//! Returns a composable `Router` with all routes nested under `/api/`.
//! The body limit is raised above axum's default so a full school-year
//! calendar PDF fits in one upload.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::config;

/// Build the API router around a pre-constructed context.
pub fn api_router(ctx: ApiContext) -> Router {
    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route(
            "/professionals",
            get(endpoints::professionals::list).post(endpoints::professionals::register),
        )
        .route("/books", post(endpoints::books::generate))
        .with_state(ctx);

    Router::new()
        .nest("/api", routes)
        .layer(DefaultBodyLimit::max(config::MAX_UPLOAD_BYTES))
}
