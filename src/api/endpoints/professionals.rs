//! Professional registration and listing.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{NewProfessional, Professional};
use crate::store::{create_professional, list_professionals, open_store};

#[derive(Serialize)]
pub struct ListResponse {
    pub professionals: Vec<Professional>,
    pub store_ok: bool,
    pub store_error: Option<String>,
}

/// `GET /api/professionals` — all registered professionals, newest first.
///
/// A store failure degrades to an empty list with a visible warning instead
/// of failing the request; the registration form stays usable either way.
pub async fn list(State(ctx): State<ApiContext>) -> Json<ListResponse> {
    match open_store(&ctx.db_path).and_then(|conn| list_professionals(&conn)) {
        Ok(professionals) => Json(ListResponse {
            professionals,
            store_ok: true,
            store_error: None,
        }),
        Err(e) => {
            tracing::warn!(error = %e, "professional listing degraded");
            Json(ListResponse {
                professionals: Vec::new(),
                store_ok: false,
                store_error: Some(e.to_string()),
            })
        }
    }
}

/// `POST /api/professionals` — register a professional.
///
/// Validation happens before the store is touched: name and role are
/// required, and professors must state their classes.
pub async fn register(
    State(ctx): State<ApiContext>,
    Json(payload): Json<NewProfessional>,
) -> Result<(StatusCode, Json<Professional>), ApiError> {
    validate_registration(&payload)?;

    let conn = open_store(&ctx.db_path)?;
    let professional = create_professional(&conn, &payload)?;

    tracing::info!(
        id = professional.id,
        role = %professional.role,
        "professional registered"
    );
    Ok((StatusCode::CREATED, Json(professional)))
}

fn validate_registration(payload: &NewProfessional) -> Result<(), ApiError> {
    if payload.name.trim().is_empty() || payload.role.trim().is_empty() {
        return Err(ApiError::Validation(
            "Nome e cargo são obrigatórios.".into(),
        ));
    }

    let is_professor = payload.role.trim().to_lowercase() == "professor";
    let has_classes = payload
        .classes_info
        .as_deref()
        .is_some_and(|c| !c.trim().is_empty());
    if is_professor && !has_classes {
        return Err(ApiError::Validation(
            "Para professor, informe as aulas.".into(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, role: &str, classes: Option<&str>) -> NewProfessional {
        NewProfessional {
            name: name.into(),
            role: role.into(),
            classes_info: classes.map(str::to_string),
            pl_info: None,
        }
    }

    #[test]
    fn requires_name_and_role() {
        assert!(validate_registration(&payload("", "Professor", Some("20h"))).is_err());
        assert!(validate_registration(&payload("Maria", "  ", None)).is_err());
    }

    #[test]
    fn professor_requires_classes() {
        assert!(validate_registration(&payload("Maria", "Professor", None)).is_err());
        assert!(validate_registration(&payload("Maria", "PROFESSOR", Some("  "))).is_err());
        assert!(validate_registration(&payload("Maria", "Professor", Some("20h"))).is_ok());
    }

    #[test]
    fn other_roles_skip_classes_requirement() {
        assert!(validate_registration(&payload("João", "Coordenador", None)).is_ok());
    }
}
