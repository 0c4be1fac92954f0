use std::sync::Arc;
use crate::domain::ports::{AdminRepository, BookingRepository, ConcertRepository, ImageStore};
use crate::domain::services::auth_service::AuthService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub concert_repo: Arc<dyn ConcertRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub admin_repo: Arc<dyn AdminRepository>,
    pub image_store: Arc<dyn ImageStore>,
    pub auth_service: Arc<AuthService>,
}
