//! Attendance book generation: calendar PDF upload in, signed sheet out.

use std::io::Write;

use axum::extract::{Multipart, State};
use axum::http::{header, HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::extract;
use crate::models::Professional;
use crate::render::render_attendance_book;
use crate::store::{get_professional, open_store};

const MISSING_UPLOAD_MESSAGE: &str = "Selecione um profissional e envie um PDF de calendário.";

/// `POST /api/books` — generate the livro de ponto for one professional.
///
/// Multipart form: `professional_id` (integer) plus `calendar_pdf` (the
/// school calendar). The upload is staged in a scoped temp file for the
/// duration of the request and deleted afterwards; only the generated book
/// leaves the handler.
pub async fn generate(
    State(ctx): State<ApiContext>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let upload = read_upload(multipart).await?;

    let conn = open_store(&ctx.db_path)?;
    let professional = get_professional(&conn, upload.professional_id)?
        .ok_or_else(|| ApiError::NotFound("Profissional não encontrado.".into()))?;

    let _staged = stage_upload(&ctx.uploads_dir, &upload.pdf_bytes)?;

    let text = extract::extract_text(&upload.pdf_bytes)?;
    let dates = extract::extract_dates(&text);
    let book = render_attendance_book(&professional, &dates)?;

    tracing::info!(
        professional_id = professional.id,
        dates = dates.len(),
        bytes = book.len(),
        "attendance book generated"
    );

    pdf_response(&professional, book)
}

struct Upload {
    professional_id: i64,
    pdf_bytes: Vec<u8>,
}

async fn read_upload(mut multipart: Multipart) -> Result<Upload, ApiError> {
    let mut professional_id: Option<i64> = None;
    let mut pdf_bytes: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(format!("Upload inválido: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "professional_id" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::Validation(format!("Upload inválido: {e}")))?;
                professional_id = value.trim().parse().ok();
            }
            "calendar_pdf" => {
                let has_filename = field.file_name().is_some_and(|f| !f.is_empty());
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::Validation(format!("Upload inválido: {e}")))?;
                if has_filename && !data.is_empty() {
                    pdf_bytes = Some(data.to_vec());
                }
            }
            _ => {}
        }
    }

    match (professional_id, pdf_bytes) {
        (Some(professional_id), Some(pdf_bytes)) => Ok(Upload {
            professional_id,
            pdf_bytes,
        }),
        _ => Err(ApiError::Validation(MISSING_UPLOAD_MESSAGE.into())),
    }
}

/// Write the upload into a scoped temp file under the uploads dir. The file
/// is deleted when the returned guard drops, satisfying the cleanup
/// obligation for uploaded calendars.
fn stage_upload(
    uploads_dir: &std::path::Path,
    bytes: &[u8],
) -> Result<tempfile::NamedTempFile, ApiError> {
    std::fs::create_dir_all(uploads_dir)
        .map_err(|e| ApiError::Internal(format!("uploads dir: {e}")))?;

    let mut staged = tempfile::Builder::new()
        .prefix("calendar_")
        .suffix(".pdf")
        .tempfile_in(uploads_dir)
        .map_err(|e| ApiError::Internal(format!("staging file: {e}")))?;
    staged
        .write_all(bytes)
        .map_err(|e| ApiError::Internal(format!("staging write: {e}")))?;
    Ok(staged)
}

fn pdf_response(professional: &Professional, book: Vec<u8>) -> Result<Response, ApiError> {
    let filename = download_filename(&professional.name);
    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
        .map_err(|e| ApiError::Internal(format!("content disposition: {e}")))?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/pdf"));
    headers.insert(header::CONTENT_DISPOSITION, disposition);

    Ok((headers, book).into_response())
}

/// `livro_ponto_<name with spaces as underscores>.pdf`, stripped of
/// characters that would break the disposition header.
fn download_filename(name: &str) -> String {
    let safe: String = name
        .trim()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| !c.is_control() && *c != '"' && *c != '\\' && *c != '/')
        .collect();
    format!("livro_ponto_{safe}.pdf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_replaces_spaces() {
        assert_eq!(
            download_filename("Maria Silva"),
            "livro_ponto_Maria_Silva.pdf"
        );
    }

    #[test]
    fn filename_strips_header_breaking_characters() {
        assert_eq!(
            download_filename("Ana \"a/b\\c\"\n"),
            "livro_ponto_Ana_abc.pdf"
        );
    }

    #[test]
    fn filename_keeps_accents() {
        assert_eq!(download_filename("João"), "livro_ponto_João.pdf");
    }
}
