pub mod professionals;
pub mod sqlite;

pub use professionals::*;
pub use sqlite::*;

use thiserror::Error;

/// Every store failure surfaces as a single kind with a human-readable
/// cause; "record not found" is expressed through `Option` returns instead.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("record store unavailable: {0}")]
    Unavailable(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}
