pub mod auth_service;
pub mod calendar;
pub mod dashboard;
pub mod search;
