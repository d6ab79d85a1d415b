//! API endpoint handlers.

pub mod books;
pub mod health;
pub mod professionals;
