use crate::domain::models::{guest::Guest, rsvp::Rsvp};
use serde::Serialize;

#[derive(Serialize)]
pub struct GuestLookupResponse {
    pub guest: Guest,
    /// Path segment for the personalized invitation URL, built from the
    /// submitted name.
    pub invitation_slug: String,
}

#[derive(Serialize)]
pub struct SubmitRsvpResponse {
    pub rsvp: Rsvp,
    pub updated: bool,
}

#[derive(Serialize)]
pub struct CountdownResponse {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

#[derive(Serialize)]
pub struct WeddingDetailsResponse {
    pub date: String,
    pub venue: String,
    pub countdown: CountdownResponse,
}
