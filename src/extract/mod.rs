pub mod calendar;
pub mod pdf;

pub use calendar::extract_dates;
pub use pdf::extract_text;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("unreadable PDF: {0}")]
    Unreadable(String),
}
