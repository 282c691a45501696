use axum::{extract::FromRequestParts, http::header};

use crate::{error::AppError, services::auth_service, state::AppState};

/// Extractor for requests carrying an admin session token.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub token: String,
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".into()))?;

        let auth_str = auth_header
            .to_str()
            .map_err(|_| AppError::BadRequest("Invalid Authorization header".into()))?;

        if !auth_str.starts_with("Bearer ") {
            return Err(AppError::BadRequest("Invalid Authorization scheme".into()));
        }
        let token = auth_str.trim_start_matches("Bearer ").trim();

        if !auth_service::is_admin(&state.sessions, token) {
            return Err(AppError::Unauthorized("Admin session required".into()));
        }

        Ok(AdminSession {
            token: token.to_string(),
        })
    }
}
