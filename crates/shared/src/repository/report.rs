use crate::{
    abstract_trait::ReportRepositoryTrait,
    config::ConnectionPool,
    domain::{
        requests::ReportQuery,
        responses::{CategoryBreakdown, IncubateeBreakdown, ReportRow},
    },
    errors::RepositoryError,
};
use async_trait::async_trait;
use tracing::{error, info};

/// Shared filter tail: completed reservations only, with every report
/// filter optional. Binds are always $1..$4 in this order: start date,
/// end date, incubatee id, category.
const REPORT_FILTER: &str = r#"
    r.status = 'completed'
    AND ($1::date IS NULL OR r.completed_at::date >= $1)
    AND ($2::date IS NULL OR r.completed_at::date <= $2)
    AND ($3::int IS NULL OR i.incubatee_id = $3)
    AND ($4::text IS NULL OR p.category = $4)
"#;

#[derive(Clone)]
pub struct ReportRepository {
    db: ConnectionPool,
}

impl ReportRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReportRepositoryTrait for ReportRepository {
    async fn sales_rows(&self, filter: &ReportQuery) -> Result<Vec<ReportRow>, RepositoryError> {
        info!("📊 Fetching report rows: {:?}", filter);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let rows = sqlx::query_as::<_, ReportRow>(&format!(
            r#"
            SELECT r.reservation_id,
                   to_char(r.completed_at, 'YYYY-MM-DD') AS date,
                   p.name AS product_name,
                   i.company_name,
                   p.category,
                   r.quantity,
                   r.price_per_stocks,
                   r.quantity * r.price_per_stocks AS subtotal
            FROM reservations r
            JOIN products p ON p.product_id = r.product_id
            JOIN incubatees i ON i.incubatee_id = p.incubatee_id
            WHERE {REPORT_FILTER}
            ORDER BY r.completed_at ASC, r.reservation_id ASC
            "#
        ))
        .bind(filter.start_date)
        .bind(filter.end_date)
        .bind(filter.incubatee_id)
        .bind(&filter.category)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch report rows: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(rows)
    }

    async fn category_breakdown(
        &self,
        filter: &ReportQuery,
    ) -> Result<Vec<CategoryBreakdown>, RepositoryError> {
        info!("📊 Fetching category breakdown: {:?}", filter);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, CategoryBreakdown>(&format!(
            r#"
            SELECT p.category,
                   SUM(r.quantity)::bigint AS units_sold,
                   SUM(r.quantity * r.price_per_stocks)::float8 AS total_sales
            FROM reservations r
            JOIN products p ON p.product_id = r.product_id
            JOIN incubatees i ON i.incubatee_id = p.incubatee_id
            WHERE {REPORT_FILTER}
            GROUP BY p.category
            ORDER BY total_sales DESC
            "#
        ))
        .bind(filter.start_date)
        .bind(filter.end_date)
        .bind(filter.incubatee_id)
        .bind(&filter.category)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch category breakdown: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(rows)
    }

    async fn incubatee_breakdown(
        &self,
        filter: &ReportQuery,
    ) -> Result<Vec<IncubateeBreakdown>, RepositoryError> {
        info!("📊 Fetching incubatee breakdown: {:?}", filter);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, IncubateeBreakdown>(&format!(
            r#"
            SELECT i.incubatee_id,
                   i.company_name,
                   SUM(r.quantity)::bigint AS units_sold,
                   SUM(r.quantity * r.price_per_stocks)::float8 AS total_sales
            FROM reservations r
            JOIN products p ON p.product_id = r.product_id
            JOIN incubatees i ON i.incubatee_id = p.incubatee_id
            WHERE {REPORT_FILTER}
            GROUP BY i.incubatee_id, i.company_name
            ORDER BY total_sales DESC
            "#
        ))
        .bind(filter.start_date)
        .bind(filter.end_date)
        .bind(filter.incubatee_id)
        .bind(&filter.category)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch incubatee breakdown: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(rows)
    }

    async fn summary_totals(
        &self,
        filter: &ReportQuery,
    ) -> Result<(f64, i64, i64, i64), RepositoryError> {
        info!("📊 Fetching summary totals: {:?}", filter);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let totals = sqlx::query_as::<_, (f64, i64, i64, i64)>(&format!(
            r#"
            SELECT COALESCE(SUM(r.quantity * r.price_per_stocks), 0)::float8 AS total_sales,
                   COUNT(*) AS total_orders,
                   COALESCE(SUM(r.quantity), 0)::bigint AS units_sold,
                   COUNT(DISTINCT r.product_id) AS products_sold
            FROM reservations r
            JOIN products p ON p.product_id = r.product_id
            JOIN incubatees i ON i.incubatee_id = p.incubatee_id
            WHERE {REPORT_FILTER}
            "#
        ))
        .bind(filter.start_date)
        .bind(filter.end_date)
        .bind(filter.incubatee_id)
        .bind(&filter.category)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch summary totals: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(totals)
    }

    async fn distinct_categories(&self) -> Result<Vec<String>, RepositoryError> {
        info!("🔍 Fetching distinct product categories");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let categories = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT category FROM products ORDER BY category ASC",
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(categories)
    }
}
