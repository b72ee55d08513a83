use crate::{
    abstract_trait::ProductQueryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::FindAllProducts,
    errors::RepositoryError,
    model::{Product, ProductWithIncubatee},
};
use async_trait::async_trait;
use tracing::{error, info};

const JOINED_COLUMNS: &str = "p.product_id, p.incubatee_id, p.name, p.stock_no, p.category, \
     p.products, p.stock_amount, p.price_per_stocks, p.pricing_unit, p.expiration_date, \
     p.warranty, p.image_path, p.added_on, i.company_name";

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<Vec<ProductWithIncubatee>, RepositoryError> {
        info!(
            "🔍 Fetching products with search: {:?}, low_stock: {}",
            req.search, req.low_stock
        );

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let search_pattern = if req.search.trim().is_empty() {
            None
        } else {
            Some(req.search.as_str())
        };

        let rows = sqlx::query_as::<_, ProductWithIncubatee>(&format!(
            r#"
            SELECT {JOINED_COLUMNS}
            FROM products p
            JOIN incubatees i ON i.incubatee_id = p.incubatee_id
            WHERE ($1::TEXT IS NULL
                   OR p.name ILIKE '%' || $1 || '%'
                   OR p.stock_no ILIKE '%' || $1 || '%'
                   OR p.category ILIKE '%' || $1 || '%')
              AND (NOT $2 OR p.stock_amount <= $3)
            ORDER BY p.added_on DESC
            "#
        ))
        .bind(search_pattern)
        .bind(req.low_stock)
        .bind(crate::domain::responses::LOW_STOCK_THRESHOLD)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch products: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        info!("🆔 Fetching product by ID: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Product>(
            r#"
            SELECT product_id, incubatee_id, name, stock_no, category, products,
                   stock_amount, price_per_stocks, pricing_unit, expiration_date,
                   warranty, image_path, added_on
            FROM products
            WHERE product_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn find_with_incubatee(
        &self,
        id: i32,
    ) -> Result<Option<ProductWithIncubatee>, RepositoryError> {
        info!("🆔 Fetching product with incubatee by ID: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductWithIncubatee>(&format!(
            r#"
            SELECT {JOINED_COLUMNS}
            FROM products p
            JOIN incubatees i ON i.incubatee_id = p.incubatee_id
            WHERE p.product_id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn find_low_stock(
        &self,
        threshold: i32,
    ) -> Result<Vec<ProductWithIncubatee>, RepositoryError> {
        info!("📉 Fetching products at or below stock: {}", threshold);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let rows = sqlx::query_as::<_, ProductWithIncubatee>(&format!(
            r#"
            SELECT {JOINED_COLUMNS}
            FROM products p
            JOIN incubatees i ON i.incubatee_id = p.incubatee_id
            WHERE p.stock_amount <= $1
            ORDER BY p.stock_amount ASC, p.name ASC
            "#
        ))
        .bind(threshold)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch low-stock products: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(rows)
    }

    async fn find_featured(
        &self,
        limit: i64,
    ) -> Result<Vec<ProductWithIncubatee>, RepositoryError> {
        info!("🎠 Fetching featured products, limit: {}", limit);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, ProductWithIncubatee>(&format!(
            r#"
            SELECT {JOINED_COLUMNS}
            FROM products p
            JOIN incubatees i ON i.incubatee_id = p.incubatee_id
            WHERE i.is_approved = TRUE
            ORDER BY p.added_on DESC
            LIMIT $1
            "#
        ))
        .bind(limit)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch featured products: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(rows)
    }
}
