use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{ConnectOptions, PgPool, SqlitePool};
use tera::Tera;
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::infra::email::http_email_service::HttpEmailService;
use crate::infra::repositories::{
    postgres_guest_repo::PostgresGuestRepo, postgres_rsvp_repo::PostgresRsvpRepo,
    sqlite_guest_repo::SqliteGuestRepo, sqlite_rsvp_repo::SqliteRsvpRepo,
};
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;
    let email_service = Arc::new(HttpEmailService::new(
        config.mail_service_url.clone(),
        config.mail_service_token.clone(),
    ));

    let mut tera = Tera::default();
    tera.add_raw_template("rsvp_notification.html", include_str!("../templates/rsvp_notification.html"))
        .expect("Failed to load notification template");
    let templates = Arc::new(tera);

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        AppState {
            config: config.clone(),
            guest_repo: Arc::new(PostgresGuestRepo::new(pool.clone())),
            rsvp_repo: Arc::new(PostgresRsvpRepo::new(pool.clone())),
            email_service,
            templates,
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        AppState {
            config: config.clone(),
            guest_repo: Arc::new(SqliteGuestRepo::new(pool.clone())),
            rsvp_repo: Arc::new(SqliteRsvpRepo::new(pool.clone())),
            email_service,
            templates,
        }
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
