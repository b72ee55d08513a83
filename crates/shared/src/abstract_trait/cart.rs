use crate::{
    domain::{
        requests::AddToCartRequest,
        responses::{ApiResponse, CartCountPayload},
    },
    errors::{RepositoryError, ServiceError},
    model::{CartItem, CartItemDetail},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCartRepository = Arc<dyn CartRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CartRepositoryTrait {
    async fn find_items(&self, user_id: i32) -> Result<Vec<CartItemDetail>, RepositoryError>;

    /// Insert or bump the row for (user, product); the stored quantity
    /// never exceeds `max_quantity`.
    async fn upsert_item(
        &self,
        user_id: i32,
        product_id: i32,
        quantity: i32,
        max_quantity: i32,
    ) -> Result<CartItem, RepositoryError>;
    async fn count_items(&self, user_id: i32) -> Result<i64, RepositoryError>;
}

pub type DynCartService = Arc<dyn CartServiceTrait + Send + Sync>;

#[async_trait]
pub trait CartServiceTrait {
    /// The overlay as a rendered HTML fragment.
    async fn render_overlay(&self, user_id: i32) -> Result<String, ServiceError>;
    async fn add_item(
        &self,
        user_id: i32,
        req: &AddToCartRequest,
    ) -> Result<ApiResponse<CartCountPayload>, ServiceError>;
    async fn count(&self, user_id: i32) -> Result<ApiResponse<CartCountPayload>, ServiceError>;
}
