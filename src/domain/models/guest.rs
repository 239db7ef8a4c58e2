use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An invitee, entered by the organizer. The stored slug is free text
/// ("Budi Santoso" is fine); it is canonicalized at resolution time only.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Guest {
    pub id: String,
    pub full_name: String,
    pub address: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

impl Guest {
    pub fn new(full_name: String, address: String, slug: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            full_name,
            address,
            slug,
            created_at: Utc::now(),
        }
    }
}
