use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PricingUnit {
    pub unit_id: i32,
    pub unit_name: String,
    pub unit_description: Option<String>,
}
