use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CartItem {
    pub cart_item_id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub added_at: Option<NaiveDateTime>,
}

/// Cart row joined with the product it references; the overlay fragment
/// renders these.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CartItemDetail {
    pub cart_item_id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub price_per_stocks: f64,
    pub stock_amount: i32,
}
