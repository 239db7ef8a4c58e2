use serde::Deserialize;

#[derive(Deserialize)]
pub struct LookupGuestRequest {
    pub name: String,
}

#[derive(Deserialize)]
pub struct SubmitRsvpRequest {
    pub is_coming: Option<bool>,
    pub total_attendees: Option<i32>,
    pub message: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateGuestRequest {
    pub full_name: String,
    pub address: String,
    pub slug: Option<String>,
}
