pub mod auth;
pub mod booking;
pub mod calendar;
pub mod concert;
pub mod dashboard;
pub mod health;
pub mod upload;
