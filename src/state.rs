use crate::config::Config;
use crate::domain::ports::{EmailService, GuestRepository, RsvpRepository};
use std::sync::Arc;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub guest_repo: Arc<dyn GuestRepository>,
    pub rsvp_repo: Arc<dyn RsvpRepository>,
    pub email_service: Arc<dyn EmailService>,
    pub templates: Arc<Tera>,
}
