use crate::{
    abstract_trait::CartRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{CartItem, CartItemDetail},
};
use async_trait::async_trait;
use tracing::{error, info};

const CART_COLUMNS: &str = "cart_item_id, user_id, product_id, quantity, added_at";

#[derive(Clone)]
pub struct CartRepository {
    db: ConnectionPool,
}

impl CartRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartRepositoryTrait for CartRepository {
    async fn find_items(&self, user_id: i32) -> Result<Vec<CartItemDetail>, RepositoryError> {
        info!("🔍 Fetching cart items for user: {}", user_id);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let rows = sqlx::query_as::<_, CartItemDetail>(
            r#"
            SELECT c.cart_item_id, c.user_id, c.product_id, p.name AS product_name,
                   c.quantity, p.price_per_stocks, p.stock_amount
            FROM cart_items c
            JOIN products p ON p.product_id = c.product_id
            WHERE c.user_id = $1
            ORDER BY c.added_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch cart items for user {}: {:?}", user_id, e);
            RepositoryError::from(e)
        })?;

        Ok(rows)
    }

    async fn upsert_item(
        &self,
        user_id: i32,
        product_id: i32,
        quantity: i32,
        max_quantity: i32,
    ) -> Result<CartItem, RepositoryError> {
        info!(
            "🛒 Adding to cart: user {} product {} x{}",
            user_id, product_id, quantity
        );

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // LEAST caps the stored quantity at the available stock, both on
        // insert and when bumping an existing row
        let item = sqlx::query_as::<_, CartItem>(&format!(
            r#"
            INSERT INTO cart_items (user_id, product_id, quantity)
            VALUES ($1, $2, LEAST($3, $4))
            ON CONFLICT (user_id, product_id)
            DO UPDATE SET quantity = LEAST(cart_items.quantity + $3, $4)
            RETURNING {CART_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(product_id)
        .bind(quantity)
        .bind(max_quantity)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to upsert cart item: {:?}", e);
            RepositoryError::from_sqlx(e, "cart item")
        })?;

        Ok(item)
    }

    async fn count_items(&self, user_id: i32) -> Result<i64, RepositoryError> {
        info!("🔢 Counting cart items for user: {}", user_id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM cart_items WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(count)
    }
}
