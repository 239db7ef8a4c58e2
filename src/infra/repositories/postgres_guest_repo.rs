use crate::domain::{models::guest::Guest, ports::GuestRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresGuestRepo {
    pool: PgPool,
}

impl PostgresGuestRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuestRepository for PostgresGuestRepo {
    async fn create(&self, guest: &Guest) -> Result<Guest, AppError> {
        sqlx::query_as::<_, Guest>(
            "INSERT INTO guests (id, full_name, address, slug, created_at) VALUES ($1, $2, $3, $4, $5) RETURNING id, full_name, address, slug, created_at",
        )
            .bind(&guest.id)
            .bind(&guest.full_name)
            .bind(&guest.address)
            .bind(&guest.slug)
            .bind(guest.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Guest>, AppError> {
        sqlx::query_as::<_, Guest>(
            "SELECT id, full_name, address, slug, created_at FROM guests ORDER BY created_at",
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_slug_verbatim(&self, slug: &str) -> Result<Option<Guest>, AppError> {
        sqlx::query_as::<_, Guest>(
            "SELECT id, full_name, address, slug, created_at FROM guests WHERE slug = $1",
        )
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM guests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Guest not found".into()));
        }
        Ok(())
    }
}
