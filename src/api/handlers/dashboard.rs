use axum::{extract::State, response::IntoResponse, Json};
use crate::api::dtos::responses::DashboardResponse;
use crate::domain::services::dashboard::{compute_stats, recent_slice};
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;

/// Aggregates over the two full collections on every call; nothing is
/// cached between requests.
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let concerts = state.concert_repo.list().await?;
    let bookings = state.booking_repo.list().await?;

    Ok(Json(DashboardResponse {
        stats: compute_stats(&concerts, &bookings),
        recent_concerts: recent_slice(&concerts),
        recent_customers: recent_slice(&bookings),
    }))
}
