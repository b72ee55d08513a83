use crate::{
    abstract_trait::ReservationCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::CreateReservationRequest,
    errors::RepositoryError,
    model::Reservation,
};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use tracing::{error, info};

const RESERVATION_COLUMNS: &str = "reservation_id, user_id, product_id, quantity, \
     price_per_stocks, status, reserved_at, rejected_reason, completed_at";

#[derive(Clone)]
pub struct ReservationCommandRepository {
    db: ConnectionPool,
}

impl ReservationCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReservationCommandRepositoryTrait for ReservationCommandRepository {
    async fn create(
        &self,
        user_id: i32,
        req: &CreateReservationRequest,
        price_per_stocks: f64,
    ) -> Result<Reservation, RepositoryError> {
        info!(
            "📝 Creating reservation: user {} product {} x{}",
            user_id, req.product_id, req.quantity
        );

        let mut tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to begin transaction: {:?}", e);
            RepositoryError::from(e)
        })?;

        // Claim the stock first; the predicate makes the claim atomic, so
        // two customers cannot both take the last units.
        let claimed = sqlx::query_as::<_, (i32,)>(
            r#"
            UPDATE products
            SET stock_amount = stock_amount - $2
            WHERE product_id = $1 AND stock_amount >= $2
            RETURNING product_id
            "#,
        )
        .bind(req.product_id)
        .bind(req.quantity)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to claim stock: {:?}", e);
            RepositoryError::from(e)
        })?;

        if claimed.is_none() {
            return Err(RepositoryError::Conflict(format!(
                "Insufficient stock for product {}",
                req.product_id
            )));
        }

        let reservation = sqlx::query_as::<_, Reservation>(&format!(
            r#"
            INSERT INTO reservations (user_id, product_id, quantity, price_per_stocks)
            VALUES ($1, $2, $3, $4)
            RETURNING {RESERVATION_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(req.product_id)
        .bind(req.quantity)
        .bind(price_per_stocks)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert reservation: {:?}", e);
            RepositoryError::from_sqlx(e, "reservation")
        })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        Ok(reservation)
    }

    async fn approve(&self, id: i32) -> Result<Reservation, RepositoryError> {
        info!("✅ Approving reservation: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let reservation = sqlx::query_as::<_, Reservation>(&format!(
            r#"
            UPDATE reservations
            SET status = 'approved'
            WHERE reservation_id = $1 AND status = 'pending'
            RETURNING {RESERVATION_COLUMNS}
            "#
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to approve reservation {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        reservation.ok_or_else(|| {
            RepositoryError::Conflict(format!("Reservation {id} is no longer pending"))
        })
    }

    async fn reject(&self, id: i32, reason: String) -> Result<Reservation, RepositoryError> {
        info!("🛑 Rejecting reservation: {}", id);

        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let reservation = sqlx::query_as::<_, Reservation>(&format!(
            r#"
            UPDATE reservations
            SET status = 'rejected', rejected_reason = $2
            WHERE reservation_id = $1 AND status IN ('pending', 'approved')
            RETURNING {RESERVATION_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&reason)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to reject reservation {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        let reservation = reservation.ok_or_else(|| {
            RepositoryError::Conflict(format!("Reservation {id} cannot be rejected"))
        })?;

        // Hand the claimed units back to the shelf in the same transaction
        sqlx::query(
            "UPDATE products SET stock_amount = stock_amount + $2 WHERE product_id = $1",
        )
        .bind(reservation.product_id)
        .bind(reservation.quantity)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to release stock for reservation {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        Ok(reservation)
    }

    async fn complete(&self, id: i32) -> Result<Reservation, RepositoryError> {
        info!("🏁 Completing reservation: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let reservation = sqlx::query_as::<_, Reservation>(&format!(
            r#"
            UPDATE reservations
            SET status = 'completed', completed_at = NOW()
            WHERE reservation_id = $1 AND status = 'approved'
            RETURNING {RESERVATION_COLUMNS}
            "#
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to complete reservation {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        reservation.ok_or_else(|| {
            RepositoryError::Conflict(format!("Reservation {id} is not approved"))
        })
    }

    async fn approve_all_pending(&self) -> Result<u64, RepositoryError> {
        info!("✅ Approving all pending reservations");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("UPDATE reservations SET status = 'approved' WHERE status = 'pending'")
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to approve pending reservations: {:?}", e);
                RepositoryError::from(e)
            })?;

        Ok(result.rows_affected())
    }

    async fn reject_approved_before(
        &self,
        cutoff: NaiveDateTime,
        reason: String,
    ) -> Result<u64, RepositoryError> {
        info!("📉 Rejecting approved reservations reserved before {}", cutoff);

        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let expired = sqlx::query_as::<_, (i32, i32)>(
            r#"
            UPDATE reservations
            SET status = 'rejected', rejected_reason = $2
            WHERE status = 'approved' AND reserved_at < $1
            RETURNING product_id, quantity
            "#,
        )
        .bind(cutoff)
        .bind(&reason)
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to reject overdue reservations: {:?}", e);
            RepositoryError::from(e)
        })?;

        // One release per product, ordered by id so concurrent sweeps lock
        // product rows in the same order.
        let mut released: BTreeMap<i32, i64> = BTreeMap::new();
        for (product_id, quantity) in &expired {
            *released.entry(*product_id).or_insert(0) += i64::from(*quantity);
        }

        for (product_id, quantity) in released {
            sqlx::query(
                "UPDATE products SET stock_amount = stock_amount + $2 WHERE product_id = $1",
            )
            .bind(product_id)
            .bind(quantity as i32)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to release stock for product {}: {:?}", product_id, e);
                RepositoryError::from(e)
            })?;
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        Ok(expired.len() as u64)
    }
}
