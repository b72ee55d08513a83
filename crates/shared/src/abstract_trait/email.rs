use crate::errors::ServiceError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub type DynEmailService = Arc<dyn EmailServiceTrait>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LowStockEmailItem {
    pub name: String,
    pub stock_amount: i32,
    pub level: String,
}

/// One restock notice addressed to an incubatee, listing every product of
/// theirs that fell to or below the low-stock threshold.
#[derive(Debug, Serialize, Deserialize)]
pub struct LowStockEmail {
    pub to: String,
    pub company_name: String,
    pub items: Vec<LowStockEmailItem>,
}

#[async_trait]
pub trait EmailServiceTrait: Send + Sync {
    async fn send_low_stock(&self, req: &LowStockEmail) -> Result<(), ServiceError>;
}
