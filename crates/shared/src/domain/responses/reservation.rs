use crate::model::{ReservationDetail, SalesLine, STATUS_APPROVED};
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An approved reservation whose pickup window has elapsed. Pending,
/// completed and rejected rows are never overdue.
pub fn is_overdue(
    status: &str,
    reserved_at: NaiveDateTime,
    timeout_ms: i64,
    now: NaiveDateTime,
) -> bool {
    status == STATUS_APPROVED
        && now.signed_duration_since(reserved_at) > Duration::milliseconds(timeout_ms)
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ReservationResponse {
    pub id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub username: String,
    pub quantity: i32,
    pub price_per_stocks: f64,
    pub status: String,
    #[serde(rename = "reserved_at")]
    pub reserved_at: String,
    pub rejected_reason: Option<String>,
    #[serde(rename = "completed_at")]
    pub completed_at: Option<String>,
    pub is_overdue: bool,
}

impl ReservationResponse {
    /// The listing embeds the overdue flag so clients can render the badge
    /// without a second round trip.
    pub fn from_detail(value: ReservationDetail, timeout_ms: i64, now: NaiveDateTime) -> Self {
        let overdue = is_overdue(&value.status, value.reserved_at, timeout_ms, now);

        ReservationResponse {
            id: value.reservation_id,
            user_id: value.user_id,
            product_id: value.product_id,
            product_name: value.product_name,
            username: value.username,
            quantity: value.quantity,
            price_per_stocks: value.price_per_stocks,
            status: value.status,
            reserved_at: value.reserved_at.to_string(),
            rejected_reason: value.rejected_reason,
            completed_at: value.completed_at.map(|dt| dt.to_string()),
            is_overdue: overdue,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct SalesLineResponse {
    pub reservation_id: i32,
    pub product_name: String,
    pub username: String,
    pub quantity: i32,
    pub price_per_stocks: f64,
    pub subtotal: f64,
    #[serde(rename = "completed_at")]
    pub completed_at: Option<String>,
}

// model to response
impl From<SalesLine> for SalesLineResponse {
    fn from(value: SalesLine) -> Self {
        let subtotal = value.price_per_stocks * value.quantity as f64;

        SalesLineResponse {
            reservation_id: value.reservation_id,
            product_name: value.product_name,
            username: value.username,
            quantity: value.quantity,
            price_per_stocks: value.price_per_stocks,
            subtotal,
            completed_at: value.completed_at.map(|dt| dt.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct SalesReportResponse {
    pub date: String,
    pub total_sales: f64,
    pub total_orders: usize,
    pub items: Vec<SalesLineResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ReservationsPayload {
    pub reservations: Vec<ReservationResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ReservationPayload {
    pub reservation: ReservationResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct RejectedCountPayload {
    pub rejected_count: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ApprovedCountPayload {
    pub approved_count: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct SalesReportPayload {
    pub report: SalesReportResponse,
}
