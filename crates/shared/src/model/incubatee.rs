use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Incubatee {
    pub incubatee_id: i32,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub batch: String,
    pub is_approved: bool,
    pub logo_path: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

/// Incubatee row extended with aggregates computed over its products and
/// completed reservations. Backs the management listing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct IncubateeWithStats {
    pub incubatee_id: i32,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub batch: String,
    pub is_approved: bool,
    pub logo_path: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub product_count: i64,
    pub total_sales: f64,
}
