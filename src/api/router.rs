use axum::{
    body::Body,
    extract::Request,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::api::handlers::{admin, guest, health, rsvp, wedding};
use crate::state::AppState;
use tower_http::{
    classify::ServerErrorsFailureClass,
    trace::TraceLayer,
};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Guest-facing invitation flow
        .route("/api/v1/guests/lookup", post(guest::lookup_guest))
        .route("/api/v1/invitations/{slug}", get(guest::get_invitation))
        .route("/api/v1/invitations/{slug}/rsvp", get(rsvp::get_rsvp).post(rsvp::submit_rsvp))
        .route("/api/v1/wishes", get(rsvp::list_wishes))
        .route("/api/v1/wedding", get(wedding::get_wedding_details))

        // Organizer administration
        .route("/api/v1/admin/guests", post(admin::create_guest).get(admin::list_guests))
        .route("/api/v1/admin/guests/{guest_id}", delete(admin::delete_guest))
        .route("/api/v1/admin/rsvps", get(admin::list_rsvps))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
