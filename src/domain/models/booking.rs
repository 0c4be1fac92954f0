use super::concert::Concert;
use super::status::{BookingStatus, DeliveryType};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One customer's hire request for a concert, tracked through the
/// fulfillment pipeline. Rows live in the `customers` table.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    pub id: String,
    pub concert_id: String,
    pub phone: String,
    /// Social handle the customer wants contacted on.
    pub x: Option<String>,
    pub round: Option<String>,
    pub ticket_count: i32,
    pub main_zone: Option<String>,
    pub backup_zone: Option<String>,
    pub use_customer_account: bool,
    pub username: Option<String>,
    pub password: Option<String>,
    pub kplus_number: Option<String>,
    pub delivery_type: DeliveryType,
    pub ticket_name: Option<String>,
    pub price: Option<f64>,
    pub status: BookingStatus,
    pub notes: Option<String>,
    pub seat_number: Option<String>,
    pub tracking_number: Option<String>,
    pub courier_service: Option<String>,
    pub delivery_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewBookingParams {
    pub concert_id: String,
    pub phone: String,
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

impl Booking {
    pub fn new(params: NewBookingParams) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            concert_id: params.concert_id,
            phone: params.phone,
            x: params.x,
            round: params.round,
            ticket_count: params.ticket_count.unwrap_or(1),
            main_zone: params.main_zone,
            backup_zone: params.backup_zone,
            use_customer_account: params.use_customer_account.unwrap_or(false),
            username: params.username,
            password: params.password,
            kplus_number: params.kplus_number,
            delivery_type: params.delivery_type.unwrap_or_default(),
            ticket_name: params.ticket_name,
            price: params.price,
            status: params.status.unwrap_or_default(),
            notes: params.notes,
            seat_number: None,
            tracking_number: None,
            courier_service: None,
            delivery_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Strips the customer purchase-account credentials. The public
    /// track-by-phone surface must never echo stored passwords.
    pub fn redacted(mut self) -> Self {
        self.username = None;
        self.password = None;
        self
    }
}

/// A booking enriched with its parent concert, the shape every read
/// endpoint returns. Serializes as the flat booking fields plus a
/// `concert` object.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BookingWithConcert {
    #[serde(flatten)]
    pub booking: Booking,
    pub concert: Concert,
}

impl BookingWithConcert {
    pub fn redacted(mut self) -> Self {
        self.booking = self.booking.redacted();
        self
    }
}
