use crate::model::ProductWithIncubatee;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const CRITICAL_STOCK_THRESHOLD: i32 = 3;
pub const LOW_STOCK_THRESHOLD: i32 = 10;

/// Stock badge shown in the inventory table: at most 3 left is critical,
/// at most 10 is low, anything above carries no badge.
pub fn classify_stock(stock_amount: i32) -> Option<&'static str> {
    if stock_amount <= CRITICAL_STOCK_THRESHOLD {
        Some("critical")
    } else if stock_amount <= LOW_STOCK_THRESHOLD {
        Some("low")
    } else {
        None
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductResponse {
    pub id: i32,
    pub incubatee_id: i32,
    pub company_name: String,
    pub name: String,
    pub stock_no: Option<String>,
    pub category: String,
    pub products: Option<String>,
    pub stock_amount: i32,
    pub price_per_stocks: f64,
    pub pricing_unit: String,
    pub expiration_date: Option<String>,
    pub warranty: Option<String>,
    pub image_path: Option<String>,
    #[serde(rename = "added_on")]
    pub added_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_level: Option<String>,
}

// model to response
impl From<ProductWithIncubatee> for ProductResponse {
    fn from(value: ProductWithIncubatee) -> Self {
        let stock_level = classify_stock(value.stock_amount).map(str::to_string);

        ProductResponse {
            id: value.product_id,
            incubatee_id: value.incubatee_id,
            company_name: value.company_name,
            name: value.name,
            stock_no: value.stock_no,
            category: value.category,
            products: value.products,
            stock_amount: value.stock_amount,
            price_per_stocks: value.price_per_stocks,
            pricing_unit: value.pricing_unit,
            expiration_date: value.expiration_date.map(|d| d.to_string()),
            warranty: value.warranty,
            image_path: value.image_path,
            added_on: value.added_on.map(|dt| dt.to_string()),
            stock_level,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductsPayload {
    pub products: Vec<ProductResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductPayload {
    pub product: ProductResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct LowStockPayload {
    pub products: Vec<ProductResponse>,
    pub critical_count: usize,
    pub low_count: usize,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct NotificationPayload {
    pub sent_count: usize,
    pub failed_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_or_fewer_is_critical() {
        assert_eq!(classify_stock(0), Some("critical"));
        assert_eq!(classify_stock(3), Some("critical"));
    }

    #[test]
    fn between_four_and_ten_is_low() {
        assert_eq!(classify_stock(4), Some("low"));
        assert_eq!(classify_stock(10), Some("low"));
    }

    #[test]
    fn above_ten_has_no_badge() {
        assert_eq!(classify_stock(11), None);
        assert_eq!(classify_stock(250), None);
    }
}
