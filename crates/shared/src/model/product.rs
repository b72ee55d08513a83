use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: i32,
    pub incubatee_id: i32,
    pub name: String,
    pub stock_no: Option<String>,
    pub category: String,
    pub products: Option<String>,
    pub stock_amount: i32,
    pub price_per_stocks: f64,
    pub pricing_unit: String,
    pub expiration_date: Option<NaiveDate>,
    pub warranty: Option<String>,
    pub image_path: Option<String>,
    pub added_on: Option<NaiveDateTime>,
}

/// Product row joined with the owning incubatee's company name, as the
/// admin inventory table renders it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProductWithIncubatee {
    pub product_id: i32,
    pub incubatee_id: i32,
    pub name: String,
    pub stock_no: Option<String>,
    pub category: String,
    pub products: Option<String>,
    pub stock_amount: i32,
    pub price_per_stocks: f64,
    pub pricing_unit: String,
    pub expiration_date: Option<NaiveDate>,
    pub warranty: Option<String>,
    pub image_path: Option<String>,
    pub added_on: Option<NaiveDateTime>,
    pub company_name: String,
}
