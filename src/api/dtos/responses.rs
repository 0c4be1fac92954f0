use crate::domain::models::{booking::BookingWithConcert, concert::Concert};
use crate::domain::services::dashboard::DashboardStats;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Serialize)]
pub struct AdminProfile {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub admin: AdminProfile,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct UploadResponse {
    pub url: String,
    pub filename: String,
}

#[derive(Serialize)]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub recent_concerts: Vec<Concert>,
    pub recent_customers: Vec<BookingWithConcert>,
}

#[derive(Serialize)]
pub struct CalendarResponse {
    pub date: NaiveDate,
    pub concerts: Vec<Concert>,
    pub marked_dates: Vec<NaiveDate>,
}
