use axum::{
    body::Body,
    extract::{DefaultBodyLimit, Request},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::api::handlers::{auth, booking, calendar, concert, dashboard, health, upload};
use crate::state::AppState;
use tower_cookies::CookieManagerLayer;
use tower_http::{
    classify::ServerErrorsFailureClass,
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))

        // Concerts (mutations gated by admin session)
        .route(
            "/api/concerts",
            get(concert::list_concerts)
                .post(concert::create_concert)
                .put(concert::update_concert)
                .delete(concert::delete_concert),
        )

        // Bookings (public intake + admin management)
        .route(
            "/api/customers",
            get(booking::list_bookings)
                .post(booking::create_booking)
                .put(booking::update_booking)
                .delete(booking::delete_booking),
        )
        .route("/api/customers/track", get(booking::track_by_phone))

        // Admin surface
        .route("/api/dashboard", get(dashboard::get_dashboard))
        .route("/api/calendar", get(calendar::get_calendar))

        // Image upload + public serving of stored files
        .route("/api/upload", post(upload::upload_image))
        .nest_service("/uploads", ServeDir::new(&state.config.upload_dir))

        // Uploads are prechecked at 5MB; the transport cap just needs headroom.
        .layer(DefaultBodyLimit::max(8 * 1024 * 1024))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        admin_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
