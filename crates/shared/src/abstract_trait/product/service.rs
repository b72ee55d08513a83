use crate::{
    domain::{
        requests::{CreateProductRequest, FindAllProducts},
        responses::{
            ApiResponse, LowStockPayload, MessageResponse, NotificationPayload, ProductPayload,
            ProductsPayload,
        },
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductService = Arc<dyn ProductServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductServiceTrait {
    async fn get_products(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponse<ProductsPayload>, ServiceError>;
    async fn get_featured(&self) -> Result<ApiResponse<ProductsPayload>, ServiceError>;
    async fn create_product(
        &self,
        req: &CreateProductRequest,
        image_path: Option<String>,
    ) -> Result<ApiResponse<ProductPayload>, ServiceError>;
    async fn delete_product(&self, id: i32) -> Result<MessageResponse, ServiceError>;
    async fn check_low_stock(&self) -> Result<ApiResponse<LowStockPayload>, ServiceError>;

    /// Emails every incubatee owning low or critical products one summary
    /// message; SMTP failures are counted, not propagated.
    async fn send_low_stock_notifications(
        &self,
    ) -> Result<ApiResponse<NotificationPayload>, ServiceError>;
}
