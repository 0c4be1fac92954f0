pub mod admin;
pub mod booking;
pub mod concert;
pub mod status;
