use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub admin_token: String,
    pub mail_service_url: String,
    pub mail_service_token: String,
    pub notify_email: Option<String>, // unset disables RSVP notifications
    pub wedding_date: String,         // local ceremony time, e.g. 2025-12-25T14:00:00
    pub wedding_timezone: String,
    pub wedding_venue: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            admin_token: env::var("ADMIN_TOKEN").expect("ADMIN_TOKEN must be set"),
            mail_service_url: env::var("MAIL_SERVICE_URL").unwrap_or_else(|_| "http://localhost:8000/api/v1/send".to_string()),
            mail_service_token: env::var("MAIL_SERVICE_TOKEN").unwrap_or_else(|_| "test-token-1".to_string()),
            notify_email: env::var("NOTIFY_EMAIL").ok(),
            wedding_date: env::var("WEDDING_DATE").unwrap_or_else(|_| "2025-12-25T14:00:00".to_string()),
            wedding_timezone: env::var("WEDDING_TIMEZONE").unwrap_or_else(|_| "Asia/Jakarta".to_string()),
            wedding_venue: env::var("WEDDING_VENUE").unwrap_or_else(|_| "To be announced".to_string()),
        }
    }
}
