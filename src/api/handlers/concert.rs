use axum::{extract::{Query, State}, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::requests::{CreateConcertRequest, DeleteQuery, UpdateConcertRequest};
use crate::api::dtos::responses::MessageResponse;
use crate::api::extractors::auth::AuthAdmin;
use crate::domain::models::concert::{Concert, NewConcertParams};
use crate::error::AppError;
use crate::state::AppState;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

pub async fn list_concerts(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let concerts = state.concert_repo.list().await?;
    Ok(Json(concerts))
}

pub async fn create_concert(
    State(state): State<Arc<AppState>>,
    AuthAdmin(admin): AuthAdmin,
    Json(payload): Json<CreateConcertRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.title.trim().is_empty() {
        return Err(AppError::Validation("title is required".into()));
    }
    if payload.service_fee.is_some_and(|fee| fee < 0.0) {
        return Err(AppError::Validation("service_fee must not be negative".into()));
    }

    let concert = Concert::new(NewConcertParams {
        title: payload.title,
        event_date: payload.event_date,
        event_url: payload.event_url,
        description: payload.description,
        service_fee: payload.service_fee,
        image_url: payload.image_url,
        status: payload.status,
    });

    let created = state.concert_repo.create(&concert).await?;
    info!("Concert created: {} by admin {}", created.id, admin.sub);

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_concert(
    State(state): State<Arc<AppState>>,
    AuthAdmin(_admin): AuthAdmin,
    Json(payload): Json<UpdateConcertRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut concert = state.concert_repo.find_by_id(&payload.id).await?
        .ok_or(AppError::NotFound("Concert not found".into()))?;

    if let Some(val) = payload.title {
        if val.trim().is_empty() {
            return Err(AppError::Validation("title cannot be empty".into()));
        }
        concert.title = val;
    }
    if let Some(val) = payload.event_date { concert.event_date = val; }
    if let Some(val) = payload.event_url { concert.event_url = Some(val); }
    if let Some(val) = payload.description { concert.description = Some(val); }
    if let Some(val) = payload.service_fee {
        if val < 0.0 {
            return Err(AppError::Validation("service_fee must not be negative".into()));
        }
        concert.service_fee = Some(val);
    }
    if let Some(val) = payload.image_url { concert.image_url = Some(val); }
    if let Some(val) = payload.status { concert.status = val; }

    concert.updated_at = Utc::now();

    let updated = state.concert_repo.update(&concert).await?;
    info!("Concert updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_concert(
    State(state): State<Arc<AppState>>,
    AuthAdmin(_admin): AuthAdmin,
    Query(params): Query<DeleteQuery>,
) -> Result<impl IntoResponse, AppError> {
    let id = params.id.ok_or(AppError::Validation("Concert ID required".into()))?;

    // Bookings for the concert go with it (FK cascade). Deleting an
    // unknown id is success by contract.
    state.concert_repo.delete(&id).await?;
    info!("Concert deleted: {}", id);

    Ok(Json(MessageResponse {
        message: "Concert deleted successfully".into(),
    }))
}
