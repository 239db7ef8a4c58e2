use invitation_backend::{
    api::router::create_router,
    config::Config,
    domain::ports::EmailService,
    error::AppError,
    infra::repositories::{sqlite_guest_repo::SqliteGuestRepo, sqlite_rsvp_repo::SqliteRsvpRepo},
    state::AppState,
};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use serde_json::Value;
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tera::Tera;
use tower::ServiceExt;
use uuid::Uuid;

pub const ADMIN_TOKEN: &str = "test-admin-token";

/// Captures outgoing notifications instead of talking to a mail relay.
#[derive(Default)]
pub struct RecordingEmailService {
    pub sent: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl EmailService for RecordingEmailService {
    async fn send(&self, recipient: &str, subject: &str, _html_body: &str) -> Result<(), AppError> {
        self.sent
            .lock()
            .unwrap()
            .push((recipient.to_string(), subject.to_string()));
        Ok(())
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
    pub emails: Arc<RecordingEmailService>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let mut tera = Tera::default();
        tera.add_raw_template(
            "rsvp_notification.html",
            "<html>Mock notification for {{ full_name }}</html>",
        )
        .unwrap();
        let templates = Arc::new(tera);

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            admin_token: ADMIN_TOKEN.to_string(),
            mail_service_url: "http://localhost".to_string(),
            mail_service_token: "token".to_string(),
            notify_email: Some("couple@example.com".to_string()),
            wedding_date: "2030-06-15T14:00:00".to_string(),
            wedding_timezone: "Asia/Jakarta".to_string(),
            wedding_venue: "Shangri-La Ballroom".to_string(),
        };

        let emails = Arc::new(RecordingEmailService::default());

        let state = Arc::new(AppState {
            config,
            guest_repo: Arc::new(SqliteGuestRepo::new(pool.clone())),
            rsvp_repo: Arc::new(SqliteRsvpRepo::new(pool.clone())),
            email_service: emails.clone(),
            templates,
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
            emails,
        }
    }

    pub async fn seed_guest(&self, full_name: &str, address: &str, slug: &str) -> Value {
        let payload = serde_json::json!({
            "full_name": full_name,
            "address": address,
            "slug": slug
        });

        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/admin/guests")
                .header(header::CONTENT_TYPE, "application/json")
                .header("X-Admin-Token", ADMIN_TOKEN)
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();

        assert!(
            response.status().is_success(),
            "Guest seeding failed: status {}",
            response.status()
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
