use axum::{extract::{Query, State}, response::IntoResponse, Json};
use crate::api::dtos::requests::CalendarQuery;
use crate::api::dtos::responses::CalendarResponse;
use crate::domain::services::calendar::{concert_dates, concerts_on_day};
use crate::error::AppError;
use crate::state::AppState;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;

pub async fn get_calendar(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CalendarQuery>,
) -> Result<impl IntoResponse, AppError> {
    let date = match params.date {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map_err(|_| AppError::Validation("Invalid date format (YYYY-MM-DD)".into()))?,
        None => Utc::now().date_naive(),
    };

    let concerts = state.concert_repo.list().await?;

    Ok(Json(CalendarResponse {
        date,
        concerts: concerts_on_day(&concerts, date),
        marked_dates: concert_dates(&concerts),
    }))
}
