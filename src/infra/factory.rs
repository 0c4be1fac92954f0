use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::PgPoolOptions, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool};
use tracing::info;

use crate::config::Config;
use crate::domain::services::auth_service::AuthService;
use crate::infra::repositories::{
    postgres_admin_repo::PostgresAdminRepo, postgres_booking_repo::PostgresBookingRepo,
    postgres_concert_repo::PostgresConcertRepo,
    sqlite_admin_repo::SqliteAdminRepo, sqlite_booking_repo::SqliteBookingRepo,
    sqlite_concert_repo::SqliteConcertRepo,
};
use crate::infra::storage::local_image_store::LocalImageStore;
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    let auth_service = Arc::new(AuthService::new(config));
    let image_store = Arc::new(LocalImageStore::new(
        config.upload_dir.clone(),
        config.public_base_url.clone(),
    ));

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        AppState {
            config: config.clone(),
            concert_repo: Arc::new(PostgresConcertRepo::new(pool.clone())),
            booking_repo: Arc::new(PostgresBookingRepo::new(pool.clone())),
            admin_repo: Arc::new(PostgresAdminRepo::new(pool)),
            image_store,
            auth_service,
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        AppState {
            config: config.clone(),
            concert_repo: Arc::new(SqliteConcertRepo::new(pool.clone())),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            admin_repo: Arc::new(SqliteAdminRepo::new(pool)),
            image_store,
            auth_service,
        }
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
