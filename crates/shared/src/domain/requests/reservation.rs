use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateReservationRequest {
    pub product_id: i32,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateReservationStatusRequest {
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,

    pub rejected_reason: Option<String>,
}

/// Body of the overdue sweep; callers may override the configured pickup
/// window for a single run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CheckOverdueRequest {
    #[validate(range(min = 1, message = "Timeout must be positive"))]
    pub timeout_ms: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, IntoParams)]
pub struct SalesReportQuery {
    pub date: Option<NaiveDate>,
}
