use crate::domain::models::{
    guest::Guest,
    rsvp::{Rsvp, SubmittedRsvp},
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait GuestRepository: Send + Sync {
    async fn create(&self, guest: &Guest) -> Result<Guest, AppError>;
    async fn list(&self) -> Result<Vec<Guest>, AppError>;
    /// Exact equality against the stored slug, no normalization. The lookup
    /// form depends on this being stricter than the URL path match.
    async fn find_by_slug_verbatim(&self, slug: &str) -> Result<Option<Guest>, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait RsvpRepository: Send + Sync {
    async fn find_by_full_name(&self, full_name: &str) -> Result<Option<Rsvp>, AppError>;
    /// Atomic create-or-amend keyed on guest_slug. The conflict arm must not
    /// touch created_at, full_name or address.
    async fn upsert(&self, rsvp: &Rsvp) -> Result<SubmittedRsvp, AppError>;
    /// All responses, most recent first; rows without created_at sort last.
    async fn list_wishes(&self) -> Result<Vec<Rsvp>, AppError>;
}

#[async_trait]
pub trait EmailService: Send + Sync {
    async fn send(&self, recipient: &str, subject: &str, html_body: &str) -> Result<(), AppError>;
}
