use concert_hire_backend::{
    api::router::create_router,
    config::Config,
    domain::models::admin::Admin,
    domain::services::auth_service::AuthService,
    infra::repositories::{
        sqlite_admin_repo::SqliteAdminRepo,
        sqlite_booking_repo::SqliteBookingRepo,
        sqlite_concert_repo::SqliteConcertRepo,
    },
    infra::storage::local_image_store::LocalImageStore,
    state::AppState,
};
use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHasher};
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub upload_dir: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let suffix = Uuid::new_v4();
        let db_filename = format!("test_{}.db", suffix);
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);
        let upload_dir = format!("test_uploads_{}", suffix);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            session_secret: "test-session-secret".to_string(),
            session_ttl_min: 15,
            upload_dir: upload_dir.clone(),
            public_base_url: "http://localhost:3000".to_string(),
        };

        let state = Arc::new(AppState {
            config: config.clone(),
            concert_repo: Arc::new(SqliteConcertRepo::new(pool.clone())),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            admin_repo: Arc::new(SqliteAdminRepo::new(pool.clone())),
            image_store: Arc::new(LocalImageStore::new(
                upload_dir.clone(),
                config.public_base_url.clone(),
            )),
            auth_service: Arc::new(AuthService::new(&config)),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            upload_dir,
            state,
        }
    }

    pub async fn seed_admin(&self, email: &str, password: &str) {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .expect("Failed to hash test password")
            .to_string();

        let admin = Admin {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            password_hash,
            name: Some("Test Admin".to_string()),
            created_at: Utc::now(),
        };

        self.state
            .admin_repo
            .create(&admin)
            .await
            .expect("Failed to seed admin");
    }

    /// Logs in and returns the value of the `session_token` cookie.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let payload = serde_json::json!({
            "email": email,
            "password": password
        });

        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();

        if !response.status().is_success() {
            panic!("Login failed in test helper: status {}", response.status());
        }

        let cookies: Vec<String> = response.headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|h| h.to_str().unwrap().to_string())
            .collect();

        let session_cookie = cookies.iter()
            .find(|c| c.contains("session_token="))
            .expect("No session_token cookie returned");

        let start = session_cookie.find("session_token=").unwrap() + 14;
        let end = session_cookie[start..].find(';').unwrap_or(session_cookie.len() - start);
        session_cookie[start..start + end].to_string()
    }

    /// Seeds a fresh admin and returns its session token. Safe to call
    /// more than once per test.
    #[allow(dead_code)]
    pub async fn admin_session(&self) -> String {
        let email = format!("admin-{}@example.com", Uuid::new_v4());
        self.seed_admin(&email, "secret-pw").await;
        self.login(&email, "secret-pw").await
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_dir_all(&self.upload_dir);
    }
}
