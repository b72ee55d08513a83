use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllProducts {
    #[serde(default)]
    pub search: String,

    #[serde(default)]
    pub low_stock: bool,
}

/// Fields of the add-product multipart form; the image part is handled
/// separately by the upload helper.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    pub incubatee_id: i32,

    #[validate(length(min = 2, message = "Product name must be at least 2 characters"))]
    pub name: String,

    pub stock_no: Option<String>,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    pub products: Option<String>,

    #[validate(range(min = 0, message = "Stock amount cannot be negative"))]
    pub stock_amount: i32,

    #[validate(range(exclusive_min = 0.0, message = "Price must be greater than zero"))]
    pub price_per_stocks: f64,

    #[validate(length(min = 1, message = "Pricing unit is required"))]
    pub pricing_unit: String,

    pub expiration_date: Option<NaiveDate>,

    pub warranty: Option<String>,
}
