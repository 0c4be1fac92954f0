use crate::domain::models::{
    admin::Admin,
    booking::{Booking, BookingWithConcert},
    concert::Concert,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait ConcertRepository: Send + Sync {
    async fn create(&self, concert: &Concert) -> Result<Concert, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Concert>, AppError>;
    /// All concerts, ordered by event_date ascending.
    async fn list(&self) -> Result<Vec<Concert>, AppError>;
    async fn update(&self, concert: &Concert) -> Result<Concert, AppError>;
    /// Idempotent: deleting an id that does not exist is success.
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, booking: &Booking) -> Result<BookingWithConcert, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<BookingWithConcert>, AppError>;
    /// All bookings, ordered by created_at descending.
    async fn list(&self) -> Result<Vec<BookingWithConcert>, AppError>;
    async fn list_by_concert(&self, concert_id: &str) -> Result<Vec<BookingWithConcert>, AppError>;
    /// Exact match on the stored phone value.
    async fn find_by_phone(&self, phone: &str) -> Result<Vec<BookingWithConcert>, AppError>;
    async fn update(&self, booking: &Booking) -> Result<BookingWithConcert, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn create(&self, admin: &Admin) -> Result<Admin, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, AppError>;
}

/// Blob store for concert images. Returns the publicly resolvable URL.
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn store(&self, filename: &str, bytes: &[u8]) -> Result<String, AppError>;
}
