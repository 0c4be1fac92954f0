pub mod postgres_admin_repo;
pub mod postgres_booking_repo;
pub mod postgres_concert_repo;
pub mod sqlite_admin_repo;
pub mod sqlite_booking_repo;
pub mod sqlite_concert_repo;
