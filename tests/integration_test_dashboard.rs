mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_concert(app: &TestApp, session: &str, title: &str, event_date: &str, status: &str) -> String {
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/concerts")
            .header(header::COOKIE, format!("session_token={}", session))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "title": title,
                "event_date": event_date,
                "status": status
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    parse_body(res).await["id"].as_str().unwrap().to_string()
}

async fn create_booking(app: &TestApp, concert_id: &str, phone: &str) -> String {
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/customers")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "concert_id": concert_id, "phone": phone
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    parse_body(res).await["id"].as_str().unwrap().to_string()
}

async fn get_dashboard(app: &TestApp) -> Value {
    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/dashboard")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await
}

#[tokio::test]
async fn test_dashboard_empty_state() {
    let app = TestApp::new().await;

    let body = get_dashboard(&app).await;
    assert_eq!(body["stats"]["totalConcerts"], 0);
    assert_eq!(body["stats"]["totalCustomers"], 0);
    assert_eq!(body["stats"]["upcomingConcerts"], 0);
    assert_eq!(body["stats"]["completedBookings"], 0);
    assert_eq!(body["recent_concerts"].as_array().unwrap().len(), 0);
    assert_eq!(body["recent_customers"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_dashboard_counts_recomputed_per_request() {
    let app = TestApp::new().await;
    let session = app.admin_session().await;

    let upcoming = create_concert(&app, &session, "Soon", "2025-09-01T20:00", "upcoming").await;
    create_concert(&app, &session, "Done", "2024-01-01T20:00", "completed").await;

    let booking_id = create_booking(&app, &upcoming, "0811111111").await;
    create_booking(&app, &upcoming, "0822222222").await;

    let body = get_dashboard(&app).await;
    assert_eq!(body["stats"]["totalConcerts"], 2);
    assert_eq!(body["stats"]["totalCustomers"], 2);
    assert_eq!(body["stats"]["upcomingConcerts"], 1);
    assert_eq!(body["stats"]["completedBookings"], 0);

    // Completing a booking shows up on the next request.
    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri("/api/customers")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "id": booking_id, "status": "completed"
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = get_dashboard(&app).await;
    assert_eq!(body["stats"]["completedBookings"], 1);
}

#[tokio::test]
async fn test_dashboard_recent_lists_cap_at_five() {
    let app = TestApp::new().await;
    let session = app.admin_session().await;

    let concert_id = create_concert(&app, &session, "Big Run", "2025-09-01T20:00", "upcoming").await;
    for i in 0..7 {
        create_booking(&app, &concert_id, &format!("08{:08}", i)).await;
    }

    let body = get_dashboard(&app).await;
    assert_eq!(body["stats"]["totalCustomers"], 7);
    assert_eq!(body["recent_customers"].as_array().unwrap().len(), 5);
    assert_eq!(body["recent_concerts"].as_array().unwrap().len(), 1);
}
