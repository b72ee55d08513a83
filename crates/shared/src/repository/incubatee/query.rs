use crate::{
    abstract_trait::IncubateeQueryRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{Incubatee, IncubateeWithStats},
};
use async_trait::async_trait;
use tracing::{error, info};

const INCUBATEE_COLUMNS: &str = "incubatee_id, first_name, middle_name, last_name, \
     company_name, email, phone, batch, is_approved, logo_path, created_at";

#[derive(Clone)]
pub struct IncubateeQueryRepository {
    db: ConnectionPool,
}

impl IncubateeQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IncubateeQueryRepositoryTrait for IncubateeQueryRepository {
    async fn find_all(&self) -> Result<Vec<Incubatee>, RepositoryError> {
        info!("🔍 Fetching all incubatees");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let rows = sqlx::query_as::<_, Incubatee>(&format!(
            "SELECT {INCUBATEE_COLUMNS} FROM incubatees ORDER BY company_name ASC"
        ))
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch incubatees: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(rows)
    }

    async fn find_with_stats(&self) -> Result<Vec<IncubateeWithStats>, RepositoryError> {
        info!("📊 Fetching incubatees with product and sales stats");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let rows = sqlx::query_as::<_, IncubateeWithStats>(
            r#"
            SELECT i.incubatee_id, i.first_name, i.middle_name, i.last_name,
                   i.company_name, i.email, i.phone, i.batch, i.is_approved,
                   i.logo_path, i.created_at,
                   COUNT(DISTINCT p.product_id) AS product_count,
                   COALESCE(SUM(r.quantity * r.price_per_stocks)
                            FILTER (WHERE r.status = 'completed'), 0) AS total_sales
            FROM incubatees i
            LEFT JOIN products p ON p.incubatee_id = i.incubatee_id
            LEFT JOIN reservations r ON r.product_id = p.product_id
            GROUP BY i.incubatee_id
            ORDER BY i.company_name ASC
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch incubatee stats: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Incubatee>, RepositoryError> {
        info!("🆔 Fetching incubatee by ID: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Incubatee>(&format!(
            "SELECT {INCUBATEE_COLUMNS} FROM incubatees WHERE incubatee_id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn find_by_email(&self, email: String) -> Result<Option<Incubatee>, RepositoryError> {
        info!("🔍 Fetching incubatee by email: {}", email);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Incubatee>(&format!(
            "SELECT {INCUBATEE_COLUMNS} FROM incubatees WHERE email = $1"
        ))
        .bind(&email)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }
}
