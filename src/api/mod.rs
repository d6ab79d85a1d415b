//! HTTP front end.
//!
//! Thin plumbing over the core: routes are nested under `/api/` and return
//! JSON, except for book generation which streams the finished PDF back.
//! The router is composable: `api_router()` returns a `Router` that can be
//! mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod types;

pub use error::ApiError;
pub use router::api_router;
pub use types::ApiContext;
