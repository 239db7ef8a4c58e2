use crate::domain::models::guest::Guest;
use crate::domain::models::rsvp::{Rsvp, SubmittedRsvp};
use crate::domain::ports::RsvpRepository;
use crate::error::AppError;
use tracing::error;

pub const MAX_ATTENDEES: i32 = 10;

/// Raw form answer, before validation.
#[derive(Debug, Clone)]
pub struct RsvpAnswer {
    pub is_coming: Option<bool>,
    pub total_attendees: i32,
    pub message: String,
}

pub async fn rsvp_for_guest(
    repo: &dyn RsvpRepository,
    full_name: &str,
) -> Result<Option<Rsvp>, AppError> {
    repo.find_by_full_name(full_name)
        .await
        .map_err(AppError::into_fetch_failed)
}

/// Validate and persist an attendance response.
///
/// Validation fails fast, before anything is written. A declined invitation
/// always stores a headcount of zero, whatever the form carried. The write
/// itself is a single atomic upsert keyed on the guest's canonical slug, so
/// two racing first-time submissions still leave exactly one record.
pub async fn submit_rsvp(
    repo: &dyn RsvpRepository,
    guest: &Guest,
    answer: &RsvpAnswer,
) -> Result<SubmittedRsvp, AppError> {
    let Some(is_coming) = answer.is_coming else {
        return Err(AppError::Validation("Attendance not selected".into()));
    };

    if is_coming && !(1..=MAX_ATTENDEES).contains(&answer.total_attendees) {
        return Err(AppError::Validation(format!(
            "Attendee count must be between 1 and {}",
            MAX_ATTENDEES
        )));
    }

    let total_attendees = if is_coming { answer.total_attendees } else { 0 };
    let rsvp = Rsvp::new(guest, is_coming, total_attendees, answer.message.clone());

    repo.upsert(&rsvp).await.map_err(|e| match e {
        AppError::Database(err) => {
            error!("RSVP upsert failed: {:?}", err);
            AppError::SubmissionFailed
        }
        other => other,
    })
}

pub async fn list_wishes(repo: &dyn RsvpRepository) -> Result<Vec<Rsvp>, AppError> {
    repo.list_wishes().await.map_err(AppError::into_fetch_failed)
}
