use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::api::dtos::{requests::SubmitRsvpRequest, responses::SubmitRsvpResponse};
use crate::domain::models::rsvp::SubmittedRsvp;
use crate::domain::services::guest_resolver::resolve_by_slug;
use crate::domain::services::rsvp_service::{self, RsvpAnswer};
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::{info, warn};

pub async fn get_rsvp(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let guest = resolve_by_slug(state.guest_repo.as_ref(), &slug).await?
        .ok_or(AppError::NotFound("Guest not found".into()))?;

    let rsvp = rsvp_service::rsvp_for_guest(state.rsvp_repo.as_ref(), &guest.full_name).await?
        .ok_or(AppError::NotFound("No RSVP recorded for this guest".into()))?;

    Ok(Json(rsvp))
}

pub async fn submit_rsvp(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Json(payload): Json<SubmitRsvpRequest>,
) -> Result<impl IntoResponse, AppError> {
    let guest = resolve_by_slug(state.guest_repo.as_ref(), &slug).await?
        .ok_or(AppError::NotFound("Guest not found".into()))?;

    let answer = RsvpAnswer {
        is_coming: payload.is_coming,
        total_attendees: payload.total_attendees.unwrap_or(1),
        message: payload.message.unwrap_or_default(),
    };

    let submitted = rsvp_service::submit_rsvp(state.rsvp_repo.as_ref(), &guest, &answer).await?;

    info!(
        "RSVP {} for {}: coming={:?}, attendees={}",
        if submitted.updated { "updated" } else { "created" },
        guest.full_name,
        submitted.rsvp.is_coming,
        submitted.rsvp.total_attendees
    );

    notify_organizers(&state, &submitted).await;

    Ok(Json(SubmitRsvpResponse {
        rsvp: submitted.rsvp,
        updated: submitted.updated,
    }))
}

pub async fn list_wishes(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let wishes = rsvp_service::list_wishes(state.rsvp_repo.as_ref()).await?;
    Ok(Json(wishes))
}

/// Best-effort: the RSVP is already persisted, so a failed notification is
/// logged and swallowed.
async fn notify_organizers(state: &Arc<AppState>, submitted: &SubmittedRsvp) {
    let Some(recipient) = state.config.notify_email.as_deref() else {
        return;
    };

    let mut ctx = tera::Context::new();
    ctx.insert("full_name", &submitted.rsvp.full_name);
    ctx.insert("is_coming", &submitted.rsvp.is_coming);
    ctx.insert("total_attendees", &submitted.rsvp.total_attendees);
    ctx.insert("message", &submitted.rsvp.message);
    ctx.insert("updated", &submitted.updated);

    let html_body = match state.templates.render("rsvp_notification.html", &ctx) {
        Ok(body) => body,
        Err(e) => {
            warn!("Could not render RSVP notification: {:?}", e);
            return;
        }
    };

    let verb = if submitted.rsvp.is_coming == Some(true) { "accepted" } else { "declined" };
    let subject = format!("{} has {} your invitation", submitted.rsvp.full_name, verb);

    if let Err(e) = state.email_service.send(recipient, &subject, &html_body).await {
        warn!("Could not deliver RSVP notification: {:?}", e);
    }
}
