use crate::domain::{
    models::rsvp::{Rsvp, SubmittedRsvp},
    ports::RsvpRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresRsvpRepo {
    pool: PgPool,
}

impl PostgresRsvpRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RsvpRepository for PostgresRsvpRepo {
    async fn find_by_full_name(&self, full_name: &str) -> Result<Option<Rsvp>, AppError> {
        sqlx::query_as::<_, Rsvp>(
            "SELECT id, guest_slug, full_name, address, is_coming, total_attendees, message, created_at, updated_at FROM rsvps WHERE full_name = $1 LIMIT 1",
        )
            .bind(full_name)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn upsert(&self, rsvp: &Rsvp) -> Result<SubmittedRsvp, AppError> {
        // EXCLUDED.created_at carries the submission instant; the conflict arm
        // reuses it as updated_at so the stored created_at is never touched.
        // A fresh insert leaves updated_at NULL, which doubles as the
        // created-vs-amended flag.
        let row = sqlx::query_as::<_, Rsvp>(
            "INSERT INTO rsvps (id, guest_slug, full_name, address, is_coming, total_attendees, message, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             ON CONFLICT (guest_slug) DO UPDATE SET \
                 is_coming = EXCLUDED.is_coming, \
                 total_attendees = EXCLUDED.total_attendees, \
                 message = EXCLUDED.message, \
                 updated_at = EXCLUDED.created_at \
             RETURNING id, guest_slug, full_name, address, is_coming, total_attendees, message, created_at, updated_at",
        )
            .bind(&rsvp.id)
            .bind(&rsvp.guest_slug)
            .bind(&rsvp.full_name)
            .bind(&rsvp.address)
            .bind(rsvp.is_coming)
            .bind(rsvp.total_attendees)
            .bind(&rsvp.message)
            .bind(rsvp.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let updated = row.updated_at.is_some();
        Ok(SubmittedRsvp { rsvp: row, updated })
    }

    async fn list_wishes(&self) -> Result<Vec<Rsvp>, AppError> {
        sqlx::query_as::<_, Rsvp>(
            "SELECT id, guest_slug, full_name, address, is_coming, total_attendees, message, created_at, updated_at FROM rsvps ORDER BY created_at DESC NULLS LAST",
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
