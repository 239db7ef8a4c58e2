use axum::{extract::FromRequestParts, http::request::Parts};
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;

/// Organizer-side guard: the static token from config must be presented in
/// the X-Admin-Token header. Visitors never see this surface.
pub struct AdminToken;

impl FromRequestParts<Arc<AppState>> for AdminToken {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get("X-Admin-Token")
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        if token != state.config.admin_token {
            return Err(AppError::Unauthorized);
        }

        Ok(AdminToken)
    }
}
