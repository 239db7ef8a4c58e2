use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::api::dtos::{requests::LookupGuestRequest, responses::GuestLookupResponse};
use crate::domain::services::guest_resolver::{resolve_by_slug, resolve_by_submitted_name};
use crate::domain::services::slug::slugify;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn lookup_guest(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LookupGuestRequest>,
) -> Result<impl IntoResponse, AppError> {
    let guest = resolve_by_submitted_name(state.guest_repo.as_ref(), &payload.name).await?
        .ok_or(AppError::NotFound("Guest not found".into()))?;

    info!("Guest lookup matched: {}", guest.full_name);

    let invitation_slug = slugify(&payload.name);
    Ok(Json(GuestLookupResponse { guest, invitation_slug }))
}

pub async fn get_invitation(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let guest = resolve_by_slug(state.guest_repo.as_ref(), &slug).await?
        .ok_or(AppError::NotFound("Guest not found".into()))?;

    Ok(Json(guest))
}
