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

async fn create_concert(app: &TestApp, session: &str, title: &str, event_date: &str) {
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/concerts")
            .header(header::COOKIE, format!("session_token={}", session))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "title": title,
                "event_date": event_date
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
}

async fn get_calendar(app: &TestApp, query: &str) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/calendar{}", query))
            .body(Body::empty()).unwrap()
    ).await.unwrap()
}

#[tokio::test]
async fn test_calendar_groups_by_day_ignoring_time() {
    let app = TestApp::new().await;
    let session = app.admin_session().await;

    create_concert(&app, &session, "Matinee", "2025-03-01T08:00").await;
    create_concert(&app, &session, "Evening Show", "2025-03-01T21:30").await;
    create_concert(&app, &session, "Other Day", "2025-03-02T20:00").await;

    let res = get_calendar(&app, "?date=2025-03-01").await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    assert_eq!(body["date"], "2025-03-01");

    let titles: Vec<&str> = body["concerts"].as_array().unwrap()
        .iter().map(|c| c["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["Matinee", "Evening Show"]);

    let marked: Vec<&str> = body["marked_dates"].as_array().unwrap()
        .iter().map(|d| d.as_str().unwrap()).collect();
    assert_eq!(marked, vec!["2025-03-01", "2025-03-02"]);
}

#[tokio::test]
async fn test_calendar_empty_day() {
    let app = TestApp::new().await;
    let session = app.admin_session().await;

    create_concert(&app, &session, "Elsewhere", "2025-03-01T20:00").await;

    let res = get_calendar(&app, "?date=2025-04-15").await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    assert_eq!(body["concerts"].as_array().unwrap().len(), 0);
    assert_eq!(body["marked_dates"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_calendar_defaults_to_today() {
    let app = TestApp::new().await;

    let res = get_calendar(&app, "").await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    let today = chrono::Utc::now().date_naive().to_string();
    assert_eq!(body["date"], today);
}

#[tokio::test]
async fn test_calendar_rejects_malformed_date() {
    let app = TestApp::new().await;

    let res = get_calendar(&app, "?date=01-03-2025").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
