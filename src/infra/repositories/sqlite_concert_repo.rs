use crate::domain::{models::concert::Concert, ports::ConcertRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteConcertRepo {
    pool: SqlitePool,
}

impl SqliteConcertRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConcertRepository for SqliteConcertRepo {
    async fn create(&self, concert: &Concert) -> Result<Concert, AppError> {
        sqlx::query_as::<_, Concert>(
            r#"INSERT INTO concerts (
                id, title, event_date, event_url, description, service_fee,
                image_url, status, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *"#,
        )
            .bind(&concert.id)
            .bind(&concert.title)
            .bind(concert.event_date)
            .bind(&concert.event_url)
            .bind(&concert.description)
            .bind(concert.service_fee)
            .bind(&concert.image_url)
            .bind(concert.status)
            .bind(concert.created_at)
            .bind(concert.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Concert>, AppError> {
        sqlx::query_as::<_, Concert>("SELECT * FROM concerts WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Concert>, AppError> {
        sqlx::query_as::<_, Concert>("SELECT * FROM concerts ORDER BY event_date ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, concert: &Concert) -> Result<Concert, AppError> {
        sqlx::query_as::<_, Concert>(
            r#"UPDATE concerts SET
                title=?, event_date=?, event_url=?, description=?,
                service_fee=?, image_url=?, status=?, updated_at=?
               WHERE id=? RETURNING *"#,
        )
            .bind(&concert.title)
            .bind(concert.event_date)
            .bind(&concert.event_url)
            .bind(&concert.description)
            .bind(concert.service_fee)
            .bind(&concert.image_url)
            .bind(concert.status)
            .bind(concert.updated_at)
            .bind(&concert.id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Concert not found".into()))
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        // Idempotent by contract: a missing row is still a successful delete.
        sqlx::query("DELETE FROM concerts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }
}
