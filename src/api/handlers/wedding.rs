use axum::{extract::State, response::IntoResponse, Json};
use chrono::{NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use crate::api::dtos::responses::{CountdownResponse, WeddingDetailsResponse};
use crate::error::AppError;
use crate::state::AppState;
use std::cmp::max;
use std::sync::Arc;

pub async fn get_wedding_details(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let tz: Tz = state.config.wedding_timezone.parse().unwrap_or(chrono_tz::UTC);

    let naive = NaiveDateTime::parse_from_str(&state.config.wedding_date, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| AppError::InternalWithMsg("Invalid WEDDING_DATE configured".into()))?;

    let ceremony = tz.from_local_datetime(&naive)
        .single()
        .ok_or(AppError::InternalWithMsg("Ambiguous WEDDING_DATE in configured timezone".into()))?;

    let remaining = max(
        ceremony.with_timezone(&Utc) - Utc::now(),
        chrono::Duration::zero(),
    );

    let countdown = CountdownResponse {
        days: remaining.num_days(),
        hours: remaining.num_hours() % 24,
        minutes: remaining.num_minutes() % 60,
        seconds: remaining.num_seconds() % 60,
    };

    Ok(Json(WeddingDetailsResponse {
        date: ceremony.to_rfc3339(),
        venue: state.config.wedding_venue.clone(),
        countdown,
    }))
}
