use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::models::guest::Guest;
use crate::domain::services::slug::normalize_slug;

/// A guest's attendance response. At most one row per guest, keyed by the
/// canonical slug so that repeated submissions amend the same record.
///
/// `is_coming` and `created_at` are nullable in storage: rows written through
/// the service always carry both, but rows entered out-of-band may not, and
/// the listings stay tolerant of them.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Rsvp {
    pub id: String,
    pub guest_slug: String,
    pub full_name: String,
    pub address: String,
    pub is_coming: Option<bool>,
    pub total_attendees: i32,
    pub message: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Rsvp {
    pub fn new(guest: &Guest, is_coming: bool, total_attendees: i32, message: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            guest_slug: normalize_slug(&guest.slug),
            full_name: guest.full_name.clone(),
            address: guest.address.clone(),
            is_coming: Some(is_coming),
            total_attendees,
            message,
            created_at: Some(Utc::now()),
            updated_at: None,
        }
    }
}

/// Outcome of an upsert: the persisted row plus whether an existing record
/// was amended, so the caller can word its confirmation.
#[derive(Debug, Clone)]
pub struct SubmittedRsvp {
    pub rsvp: Rsvp,
    pub updated: bool,
}
