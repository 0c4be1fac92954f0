use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use crate::domain::models::admin::SessionClaims;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::Span;

pub const SESSION_COOKIE: &str = "session_token";

/// Explicit session context for admin-gated handlers. Rejects with 401
/// before the handler body runs, so no store write can happen without a
/// valid session.
pub struct AuthAdmin(pub SessionClaims);

impl<S> FromRequestParts<S> for AuthAdmin
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let cookies = parts
            .extensions
            .get::<Cookies>()
            .ok_or(AppError::Internal)?;

        let token = cookies
            .get(SESSION_COOKIE)
            .ok_or(AppError::Unauthorized)?
            .value()
            .to_string();

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);
        let claims = app_state.auth_service.verify_session(&token)?;

        Span::current().record("admin_id", claims.sub.as_str());

        Ok(AuthAdmin(claims))
    }
}
