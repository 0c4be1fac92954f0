use crate::domain::models::booking::{Booking, BookingWithConcert};
use crate::domain::models::concert::Concert;
use crate::domain::ports::BookingRepository;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;
use std::collections::HashMap;

pub struct SqliteBookingRepo {
    pool: SqlitePool,
}

impl SqliteBookingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Joins each booking with its parent concert. The FK is declared
    /// ON DELETE CASCADE, so a surviving booking always has its concert.
    async fn attach_concerts(
        &self,
        bookings: Vec<Booking>,
    ) -> Result<Vec<BookingWithConcert>, AppError> {
        let mut concerts: HashMap<String, Concert> = HashMap::new();

        for booking in &bookings {
            if concerts.contains_key(&booking.concert_id) {
                continue;
            }
            let concert = sqlx::query_as::<_, Concert>("SELECT * FROM concerts WHERE id = ?")
                .bind(&booking.concert_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(AppError::Database)?
                .ok_or_else(|| {
                    AppError::InternalWithMsg(format!(
                        "booking {} references missing concert {}",
                        booking.id, booking.concert_id
                    ))
                })?;
            concerts.insert(booking.concert_id.clone(), concert);
        }

        Ok(bookings
            .into_iter()
            .map(|booking| {
                let concert = concerts[&booking.concert_id].clone();
                BookingWithConcert { booking, concert }
            })
            .collect())
    }
}

#[async_trait]
impl BookingRepository for SqliteBookingRepo {
    async fn create(&self, booking: &Booking) -> Result<BookingWithConcert, AppError> {
        let created = sqlx::query_as::<_, Booking>(
            r#"INSERT INTO customers (
                id, concert_id, phone, x, round, ticket_count, main_zone, backup_zone,
                use_customer_account, username, password, kplus_number, delivery_type,
                ticket_name, price, status, notes, seat_number, tracking_number,
                courier_service, delivery_date, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *"#,
        )
            .bind(&booking.id)
            .bind(&booking.concert_id)
            .bind(&booking.phone)
            .bind(&booking.x)
            .bind(&booking.round)
            .bind(booking.ticket_count)
            .bind(&booking.main_zone)
            .bind(&booking.backup_zone)
            .bind(booking.use_customer_account)
            .bind(&booking.username)
            .bind(&booking.password)
            .bind(&booking.kplus_number)
            .bind(booking.delivery_type)
            .bind(&booking.ticket_name)
            .bind(booking.price)
            .bind(booking.status)
            .bind(&booking.notes)
            .bind(&booking.seat_number)
            .bind(&booking.tracking_number)
            .bind(&booking.courier_service)
            .bind(booking.delivery_date)
            .bind(booking.created_at)
            .bind(booking.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let mut joined = self.attach_concerts(vec![created]).await?;
        Ok(joined.remove(0))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<BookingWithConcert>, AppError> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM customers WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        match booking {
            Some(b) => Ok(self.attach_concerts(vec![b]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<BookingWithConcert>, AppError> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM customers ORDER BY created_at DESC",
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        self.attach_concerts(bookings).await
    }

    async fn list_by_concert(&self, concert_id: &str) -> Result<Vec<BookingWithConcert>, AppError> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM customers WHERE concert_id = ? ORDER BY created_at DESC",
        )
            .bind(concert_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        self.attach_concerts(bookings).await
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Vec<BookingWithConcert>, AppError> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM customers WHERE phone = ? ORDER BY created_at DESC",
        )
            .bind(phone)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        self.attach_concerts(bookings).await
    }

    async fn update(&self, booking: &Booking) -> Result<BookingWithConcert, AppError> {
        let updated = sqlx::query_as::<_, Booking>(
            r#"UPDATE customers SET
                concert_id=?, phone=?, x=?, round=?, ticket_count=?, main_zone=?,
                backup_zone=?, use_customer_account=?, username=?, password=?,
                kplus_number=?, delivery_type=?, ticket_name=?, price=?, status=?,
                notes=?, seat_number=?, tracking_number=?, courier_service=?,
                delivery_date=?, updated_at=?
               WHERE id=? RETURNING *"#,
        )
            .bind(&booking.concert_id)
            .bind(&booking.phone)
            .bind(&booking.x)
            .bind(&booking.round)
            .bind(booking.ticket_count)
            .bind(&booking.main_zone)
            .bind(&booking.backup_zone)
            .bind(booking.use_customer_account)
            .bind(&booking.username)
            .bind(&booking.password)
            .bind(&booking.kplus_number)
            .bind(booking.delivery_type)
            .bind(&booking.ticket_name)
            .bind(booking.price)
            .bind(booking.status)
            .bind(&booking.notes)
            .bind(&booking.seat_number)
            .bind(&booking.tracking_number)
            .bind(&booking.courier_service)
            .bind(booking.delivery_date)
            .bind(booking.updated_at)
            .bind(&booking.id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Customer not found".into()))?;

        let mut joined = self.attach_concerts(vec![updated]).await?;
        Ok(joined.remove(0))
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }
}
