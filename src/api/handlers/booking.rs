use axum::{extract::{Query, State}, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::requests::{
    CreateBookingRequest, DeleteQuery, ListBookingsQuery, TrackQuery, UpdateBookingRequest,
};
use crate::api::dtos::responses::MessageResponse;
use crate::domain::models::booking::{Booking, NewBookingParams};
use crate::domain::models::status::BookingStatus;
use crate::domain::services::search::BookingFilter;
use crate::error::AppError;
use crate::state::AppState;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListBookingsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let mut bookings = if let Some(id) = &params.id {
        state.booking_repo.find_by_id(id).await?.into_iter().collect()
    } else if let Some(concert_id) = non_all(params.concert_id.as_deref()) {
        state.booking_repo.list_by_concert(concert_id).await?
    } else {
        state.booking_repo.list().await?
    };

    let filter = BookingFilter {
        query: params.search.filter(|s| !s.trim().is_empty()),
        status: match non_all(params.status.as_deref()) {
            Some(raw) => Some(
                BookingStatus::parse(raw)
                    .ok_or_else(|| AppError::Validation(format!("Invalid status: {raw}")))?,
            ),
            None => None,
        },
        concert_id: None,
    };

    if !filter.is_empty() {
        bookings.retain(|b| filter.matches(b));
    }

    Ok(Json(bookings))
}

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let concert_id = payload.concert_id.filter(|v| !v.is_empty());
    let phone = payload.phone.filter(|v| !v.is_empty());

    let (concert_id, phone) = match (concert_id, phone) {
        (Some(c), Some(p)) => (c, p),
        _ => return Err(AppError::Validation("concert_id and phone are required".into())),
    };

    if payload.ticket_count.is_some_and(|n| n < 1) {
        return Err(AppError::Validation("ticket_count must be at least 1".into()));
    }

    let booking = Booking::new(NewBookingParams {
        concert_id,
        phone,
        x: payload.x,
        round: payload.round,
        ticket_count: payload.ticket_count,
        main_zone: payload.main_zone,
        backup_zone: payload.backup_zone,
        use_customer_account: payload.use_customer_account,
        username: payload.username,
        password: payload.password,
        kplus_number: payload.kplus_number,
        delivery_type: payload.delivery_type,
        ticket_name: payload.ticket_name,
        price: payload.price,
        status: payload.status,
        notes: payload.notes,
    });

    let created = state.booking_repo.create(&booking).await?;
    info!("Booking created: {} for concert {}", created.booking.id, created.booking.concert_id);

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UpdateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let id = payload.id.ok_or(AppError::Validation("id is required".into()))?;

    let existing = state.booking_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Customer not found".into()))?;
    let mut booking = existing.booking;

    if let Some(val) = payload.concert_id {
        if val.is_empty() {
            return Err(AppError::Validation("concert_id cannot be empty".into()));
        }
        booking.concert_id = val;
    }
    if let Some(val) = payload.phone {
        if val.is_empty() {
            return Err(AppError::Validation("phone cannot be empty".into()));
        }
        booking.phone = val;
    }
    if let Some(val) = payload.ticket_count {
        if val < 1 {
            return Err(AppError::Validation("ticket_count must be at least 1".into()));
        }
        booking.ticket_count = val;
    }
    if let Some(val) = payload.use_customer_account { booking.use_customer_account = val; }
    if let Some(val) = payload.delivery_type { booking.delivery_type = val; }
    if let Some(val) = payload.status { booking.status = val; }

    if let Some(val) = payload.x { booking.x = clean(val); }
    if let Some(val) = payload.round { booking.round = clean(val); }
    if let Some(val) = payload.main_zone { booking.main_zone = clean(val); }
    if let Some(val) = payload.backup_zone { booking.backup_zone = clean(val); }
    if let Some(val) = payload.username { booking.username = clean(val); }
    if let Some(val) = payload.password { booking.password = clean(val); }
    if let Some(val) = payload.kplus_number { booking.kplus_number = clean(val); }
    if let Some(val) = payload.ticket_name { booking.ticket_name = clean(val); }
    if let Some(val) = payload.notes { booking.notes = clean(val); }
    if let Some(val) = payload.seat_number { booking.seat_number = clean(val); }
    if let Some(val) = payload.tracking_number { booking.tracking_number = clean(val); }
    if let Some(val) = payload.courier_service { booking.courier_service = clean(val); }
    if let Some(val) = payload.price { booking.price = val; }
    if let Some(val) = payload.delivery_date { booking.delivery_date = val; }

    booking.updated_at = Utc::now();

    let updated = state.booking_repo.update(&booking).await?;
    info!("Booking updated: {}", updated.booking.id);
    Ok(Json(updated))
}

pub async fn delete_booking(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DeleteQuery>,
) -> Result<impl IntoResponse, AppError> {
    let id = params.id.ok_or(AppError::Validation("id is required".into()))?;

    state.booking_repo.delete(&id).await?;
    info!("Booking deleted: {}", id);

    Ok(Json(MessageResponse {
        message: "Customer deleted successfully".into(),
    }))
}

/// Public lookup: exact match on the stored phone value. Account
/// credentials are stripped from the response.
pub async fn track_by_phone(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TrackQuery>,
) -> Result<impl IntoResponse, AppError> {
    let phone = params.phone.filter(|p| !p.is_empty())
        .ok_or(AppError::Validation("phone is required".into()))?;

    let bookings = state.booking_repo.find_by_phone(&phone).await?;
    let public: Vec<_> = bookings.into_iter().map(|b| b.redacted()).collect();

    Ok(Json(public))
}

/// The admin list view sends "all" for an unset dropdown filter.
fn non_all(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && *v != "all")
}

/// Intake-form cleanup rule: an explicit empty string means "not provided".
fn clean(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
