//! Livro de Ponto: registers school professionals and generates their
//! attendance log PDFs from uploaded calendar PDFs.
//!
//! The interesting work lives in two places: `extract`, which scans
//! free-form calendar text for dates in three textual shapes, and `render`,
//! which lays the signature sheet out page by page. Everything else is
//! plumbing: a SQLite-backed record store and a small axum API.

pub mod api;
pub mod config;
pub mod extract;
pub mod models;
pub mod render;
pub mod store;
