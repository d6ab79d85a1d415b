use super::ExtractionError;

/// Pulls the text layer out of a calendar PDF using the pdf-extract crate.
/// The backend is a black box here: any failure inside it maps to
/// [`ExtractionError::Unreadable`]. A PDF that parses but carries no text
/// is not an error; it simply produces no dates downstream.
pub fn extract_text(pdf_bytes: &[u8]) -> Result<String, ExtractionError> {
    pdf_extract::extract_text_from_mem(pdf_bytes)
        .map_err(|e| ExtractionError::Unreadable(e.to_string()))
}
