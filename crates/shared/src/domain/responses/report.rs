use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One line of the admin report preview and CSV export, shaped by the
/// repository query.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, FromRow)]
pub struct ReportRow {
    pub reservation_id: i32,
    pub date: Option<String>,
    pub product_name: String,
    pub company_name: String,
    pub category: String,
    pub quantity: i32,
    pub price_per_stocks: f64,
    pub subtotal: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, FromRow)]
pub struct CategoryBreakdown {
    pub category: String,
    pub units_sold: i64,
    pub total_sales: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, FromRow)]
pub struct IncubateeBreakdown {
    pub incubatee_id: i32,
    pub company_name: String,
    pub units_sold: i64,
    pub total_sales: f64,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Clone)]
pub struct SalesSummaryResponse {
    pub total_sales: f64,
    pub total_orders: i64,
    pub units_sold: i64,
    pub products_sold: i64,
    pub by_category: Vec<CategoryBreakdown>,
    pub by_incubatee: Vec<IncubateeBreakdown>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ReportTotals {
    pub total_sales: f64,
    pub total_orders: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct SummaryPayload {
    pub summary: SalesSummaryResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct PreviewPayload {
    pub rows: Vec<ReportRow>,
    pub totals: ReportTotals,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CategoriesPayload {
    pub categories: Vec<String>,
}
