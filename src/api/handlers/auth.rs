use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::requests::LoginRequest;
use crate::api::dtos::responses::{AdminProfile, AuthResponse};
use crate::api::extractors::auth::SESSION_COOKIE;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use time::Duration;
use tower_cookies::cookie::SameSite;
use tower_cookies::{Cookie, Cookies};
use tracing::info;

pub async fn login(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let admin = state.admin_repo.find_by_email(&payload.email).await?
        .ok_or(AppError::Unauthorized)?;

    state.auth_service.verify_password(&admin, &payload.password)?;

    let token = state.auth_service.issue_session(&admin)?;
    set_session_cookie(&cookies, token, state.auth_service.session_ttl_min());

    info!("Admin logged in: {}", admin.id);

    Ok(Json(AuthResponse {
        admin: AdminProfile {
            id: admin.id,
            email: admin.email,
            name: admin.name,
        },
    }))
}

pub async fn logout(cookies: Cookies) -> impl IntoResponse {
    cookies.remove(Cookie::build((SESSION_COOKIE, "")).path("/").into());
    info!("Admin logged out");
    StatusCode::OK
}

fn set_session_cookie(cookies: &Cookies, token: String, ttl_min: i64) {
    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_http_only(true);
    cookie.set_secure(true);
    cookie.set_same_site(SameSite::Strict);
    cookie.set_path("/");
    cookie.set_max_age(Duration::minutes(ttl_min));
    cookies.add(cookie);
}
