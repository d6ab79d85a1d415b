pub mod book;
pub mod layout;

pub use book::render_attendance_book;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF backend error: {0}")]
    Backend(String),
}
