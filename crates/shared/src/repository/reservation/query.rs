use crate::{
    abstract_trait::ReservationQueryRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{Reservation, ReservationDetail, SalesLine},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{error, info};

const RESERVATION_COLUMNS: &str = "reservation_id, user_id, product_id, quantity, \
     price_per_stocks, status, reserved_at, rejected_reason, completed_at";

const DETAIL_COLUMNS: &str = "r.reservation_id, r.user_id, r.product_id, \
     p.name AS product_name, u.username, r.quantity, r.price_per_stocks, r.status, \
     r.reserved_at, r.rejected_reason, r.completed_at";

#[derive(Clone)]
pub struct ReservationQueryRepository {
    db: ConnectionPool,
}

impl ReservationQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReservationQueryRepositoryTrait for ReservationQueryRepository {
    async fn find_all(&self) -> Result<Vec<ReservationDetail>, RepositoryError> {
        info!("🔍 Fetching all reservations");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let rows = sqlx::query_as::<_, ReservationDetail>(&format!(
            r#"
            SELECT {DETAIL_COLUMNS}
            FROM reservations r
            JOIN products p ON p.product_id = r.product_id
            JOIN users u ON u.user_id = r.user_id
            ORDER BY r.reserved_at DESC
            "#
        ))
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch reservations: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Reservation>, RepositoryError> {
        info!("🆔 Fetching reservation by ID: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Reservation>(&format!(
            "SELECT {RESERVATION_COLUMNS} FROM reservations WHERE reservation_id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn find_detail_by_id(
        &self,
        id: i32,
    ) -> Result<Option<ReservationDetail>, RepositoryError> {
        info!("🆔 Fetching reservation detail by ID: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ReservationDetail>(&format!(
            r#"
            SELECT {DETAIL_COLUMNS}
            FROM reservations r
            JOIN products p ON p.product_id = r.product_id
            JOIN users u ON u.user_id = r.user_id
            WHERE r.reservation_id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn find_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<ReservationDetail>, RepositoryError> {
        info!("🔍 Fetching reservations for user: {}", user_id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, ReservationDetail>(&format!(
            r#"
            SELECT {DETAIL_COLUMNS}
            FROM reservations r
            JOIN products p ON p.product_id = r.product_id
            JOIN users u ON u.user_id = r.user_id
            WHERE r.user_id = $1
            ORDER BY r.reserved_at DESC
            "#
        ))
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch reservations for user {}: {:?}", user_id, e);
            RepositoryError::from(e)
        })?;

        Ok(rows)
    }

    async fn find_completed_on(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<SalesLine>, RepositoryError> {
        info!("📊 Fetching completed reservations for: {}", date);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, SalesLine>(
            r#"
            SELECT r.reservation_id, p.name AS product_name, u.username, r.quantity,
                   r.price_per_stocks, r.completed_at
            FROM reservations r
            JOIN products p ON p.product_id = r.product_id
            JOIN users u ON u.user_id = r.user_id
            WHERE r.status = 'completed' AND r.completed_at::date = $1
            ORDER BY r.completed_at ASC
            "#,
        )
        .bind(date)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch sales for {}: {:?}", date, e);
            RepositoryError::from(e)
        })?;

        Ok(rows)
    }
}
