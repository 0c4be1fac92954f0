use crate::domain::{models::concert::Concert, ports::ConcertRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresConcertRepo {
    pool: PgPool,
}

impl PostgresConcertRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConcertRepository for PostgresConcertRepo {
    async fn create(&self, concert: &Concert) -> Result<Concert, AppError> {
        sqlx::query_as::<_, Concert>(
            r#"INSERT INTO concerts (
                id, title, event_date, event_url, description, service_fee,
                image_url, status, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
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
        sqlx::query_as::<_, Concert>("SELECT * FROM concerts WHERE id = $1")
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
                title=$1, event_date=$2, event_url=$3, description=$4,
                service_fee=$5, image_url=$6, status=$7, updated_at=$8
               WHERE id=$9 RETURNING *"#,
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
        sqlx::query("DELETE FROM concerts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }
}
