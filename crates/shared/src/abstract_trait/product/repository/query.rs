use crate::{
    domain::requests::FindAllProducts,
    errors::RepositoryError,
    model::{Product, ProductWithIncubatee},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    /// Inventory listing joined with company names, newest first; honors
    /// the search and low-stock filters.
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<Vec<ProductWithIncubatee>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError>;
    async fn find_with_incubatee(
        &self,
        id: i32,
    ) -> Result<Option<ProductWithIncubatee>, RepositoryError>;
    async fn find_low_stock(
        &self,
        threshold: i32,
    ) -> Result<Vec<ProductWithIncubatee>, RepositoryError>;

    /// Latest products of approved incubatees for the home-page carousel.
    async fn find_featured(&self, limit: i64)
    -> Result<Vec<ProductWithIncubatee>, RepositoryError>;
}
