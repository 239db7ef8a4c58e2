use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::api::dtos::requests::CreateGuestRequest;
use crate::api::extractors::admin::AdminToken;
use crate::domain::models::guest::Guest;
use crate::domain::services::rsvp_service;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn create_guest(
    State(state): State<Arc<AppState>>,
    _admin: AdminToken,
    Json(payload): Json<CreateGuestRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.full_name.trim().is_empty() {
        return Err(AppError::Validation("Guest name must not be empty".into()));
    }

    let slug = payload.slug.unwrap_or_else(|| payload.full_name.clone());
    let guest = Guest::new(payload.full_name, payload.address, slug);
    let created = state.guest_repo.create(&guest).await?;

    info!("Guest created: {} ({})", created.full_name, created.id);
    Ok(Json(created))
}

pub async fn list_guests(
    State(state): State<Arc<AppState>>,
    _admin: AdminToken,
) -> Result<impl IntoResponse, AppError> {
    let guests = state.guest_repo.list().await?;
    Ok(Json(guests))
}

pub async fn delete_guest(
    State(state): State<Arc<AppState>>,
    _admin: AdminToken,
    Path(guest_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.guest_repo.delete(&guest_id).await?;
    info!("Guest deleted: {}", guest_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

pub async fn list_rsvps(
    State(state): State<Arc<AppState>>,
    _admin: AdminToken,
) -> Result<impl IntoResponse, AppError> {
    let rsvps = rsvp_service::list_wishes(state.rsvp_repo.as_ref()).await?;
    Ok(Json(rsvps))
}
