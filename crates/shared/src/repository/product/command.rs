use crate::{
    abstract_trait::ProductCommandRepositoryTrait, config::ConnectionPool,
    domain::requests::CreateProductRequest, errors::RepositoryError, model::Product,
};
use async_trait::async_trait;
use tracing::{error, info};

const PRODUCT_COLUMNS: &str = "product_id, incubatee_id, name, stock_no, category, products, \
     stock_amount, price_per_stocks, pricing_unit, expiration_date, warranty, image_path, \
     added_on";

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create(
        &self,
        req: &CreateProductRequest,
        image_path: Option<String>,
    ) -> Result<Product, RepositoryError> {
        info!("📝 Creating product: {}", req.name);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            INSERT INTO products (incubatee_id, name, stock_no, category, products,
                                  stock_amount, price_per_stocks, pricing_unit,
                                  expiration_date, warranty, image_path)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(req.incubatee_id)
        .bind(&req.name)
        .bind(&req.stock_no)
        .bind(&req.category)
        .bind(&req.products)
        .bind(req.stock_amount)
        .bind(req.price_per_stocks)
        .bind(&req.pricing_unit)
        .bind(req.expiration_date)
        .bind(&req.warranty)
        .bind(&image_path)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to create product: {:?}", e);
            RepositoryError::from_sqlx(e, "product")
        })?;

        Ok(product)
    }

    async fn delete(&self, id: i32) -> Result<Product, RepositoryError> {
        info!("🗑️ Deleting product: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            DELETE FROM products
            WHERE product_id = $1
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete product: {:?}", e);
            RepositoryError::from(e)
        })?;

        product.ok_or(RepositoryError::NotFound)
    }
}
