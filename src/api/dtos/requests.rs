use crate::domain::models::status::{BookingStatus, ConcertStatus, DeliveryType};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct CreateConcertRequest {
    pub title: String,
    #[serde(deserialize_with = "flexible_datetime")]
    pub event_date: DateTime<Utc>,
    pub event_url: Option<String>,
    pub description: Option<String>,
    pub service_fee: Option<f64>,
    pub image_url: Option<String>,
    pub status: Option<ConcertStatus>,
}

#[derive(Deserialize)]
pub struct UpdateConcertRequest {
    pub id: String,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "flexible_datetime_opt")]
    pub event_date: Option<DateTime<Utc>>,
    pub event_url: Option<String>,
    pub description: Option<String>,
    pub service_fee: Option<f64>,
    pub image_url: Option<String>,
    pub status: Option<ConcertStatus>,
}

/// Public intake / admin creation. `concert_id` and `phone` are required,
/// but modeled as options so the handler can answer with the contract's
/// 400 message instead of a body-rejection.
#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub concert_id: Option<String>,
    pub phone: Option<String>,
    pub x: Option<String>,
    pub round: Option<String>,
    pub ticket_count: Option<i32>,
    pub main_zone: Option<String>,
    pub backup_zone: Option<String>,
    pub use_customer_account: Option<bool>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub kplus_number: Option<String>,
    pub delivery_type: Option<DeliveryType>,
    pub ticket_name: Option<String>,
    pub price: Option<f64>,
    pub status: Option<BookingStatus>,
    pub notes: Option<String>,
}

/// Patch body for bookings. Outer `None` means "leave unchanged";
/// `Some(None)` means "clear". An empty string is normalized to a clear
/// by the handler, per the intake form's cleanup rule.
#[derive(Deserialize)]
pub struct UpdateBookingRequest {
    pub id: Option<String>,
    pub concert_id: Option<String>,
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub x: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub round: Option<Option<String>>,
    pub ticket_count: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub main_zone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub backup_zone: Option<Option<String>>,
    pub use_customer_account: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    pub username: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub password: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub kplus_number: Option<Option<String>>,
    pub delivery_type: Option<DeliveryType>,
    #[serde(default, deserialize_with = "double_option")]
    pub ticket_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub price: Option<Option<f64>>,
    pub status: Option<BookingStatus>,
    #[serde(default, deserialize_with = "double_option")]
    pub notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub seat_number: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub tracking_number: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub courier_service: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub delivery_date: Option<Option<NaiveDate>>,
}

#[derive(Deserialize)]
pub struct ListBookingsQuery {
    pub id: Option<String>,
    pub concert_id: Option<String>,
    pub search: Option<String>,
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct TrackQuery {
    pub phone: Option<String>,
}

#[derive(Deserialize)]
pub struct DeleteQuery {
    pub id: Option<String>,
}

#[derive(Deserialize)]
pub struct CalendarQuery {
    pub date: Option<String>,
}

/// Wraps any present value (including an explicit null) in `Some`, so a
/// patch body can distinguish "absent" from "set to null".
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Accepts RFC 3339 or the naive `YYYY-MM-DDTHH:MM[:SS]` shape produced by
/// datetime-local form inputs (interpreted as UTC).
fn flexible_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_flexible(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid datetime: {s}")))
}

fn flexible_datetime_opt<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        None => Ok(None),
        Some(s) => parse_flexible(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid datetime: {s}"))),
    }
}

fn parse_flexible(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(DateTime::from_naive_utc_and_offset(naive, Utc));
        }
    }
    None
}
