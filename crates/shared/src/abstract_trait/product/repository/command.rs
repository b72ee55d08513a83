use crate::{domain::requests::CreateProductRequest, errors::RepositoryError, model::Product};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create(
        &self,
        req: &CreateProductRequest,
        image_path: Option<String>,
    ) -> Result<Product, RepositoryError>;

    /// Hard delete; returns the removed row so callers can clean up the
    /// stored image.
    async fn delete(&self, id: i32) -> Result<Product, RepositoryError>;
}
