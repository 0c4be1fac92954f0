use super::status::ConcertStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Concert {
    pub id: String,
    pub title: String,
    pub event_date: DateTime<Utc>,
    pub event_url: Option<String>,
    pub description: Option<String>,
    pub service_fee: Option<f64>,
    pub image_url: Option<String>,
    pub status: ConcertStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewConcertParams {
    pub title: String,
    pub event_date: DateTime<Utc>,
    pub event_url: Option<String>,
    pub description: Option<String>,
    pub service_fee: Option<f64>,
    pub image_url: Option<String>,
    pub status: Option<ConcertStatus>,
}

impl Concert {
    pub fn new(params: NewConcertParams) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: params.title,
            event_date: params.event_date,
            event_url: params.event_url,
            description: params.description,
            service_fee: params.service_fee,
            image_url: params.image_url,
            status: params.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }
}
