use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_APPROVED: &str = "approved";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_REJECTED: &str = "rejected";

/// Legal status edges: pending may be approved or rejected, approved may
/// be completed or rejected. Completed and rejected are terminal.
pub fn can_transition(from: &str, to: &str) -> bool {
    matches!(
        (from, to),
        (STATUS_PENDING, STATUS_APPROVED)
            | (STATUS_PENDING, STATUS_REJECTED)
            | (STATUS_APPROVED, STATUS_COMPLETED)
            | (STATUS_APPROVED, STATUS_REJECTED)
    )
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    pub reservation_id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price_per_stocks: f64,
    pub status: String,
    pub reserved_at: NaiveDateTime,
    pub rejected_reason: Option<String>,
    pub completed_at: Option<NaiveDateTime>,
}

/// Reservation joined with product name and reserving username, as the
/// review table renders it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReservationDetail {
    pub reservation_id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub username: String,
    pub quantity: i32,
    pub price_per_stocks: f64,
    pub status: String,
    pub reserved_at: NaiveDateTime,
    pub rejected_reason: Option<String>,
    pub completed_at: Option<NaiveDateTime>,
}

/// One line of a daily sales report, sourced from completed reservations.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SalesLine {
    pub reservation_id: i32,
    pub product_name: String,
    pub username: String,
    pub quantity: i32,
    pub price_per_stocks: f64,
    pub completed_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_can_be_approved_or_rejected() {
        assert!(can_transition(STATUS_PENDING, STATUS_APPROVED));
        assert!(can_transition(STATUS_PENDING, STATUS_REJECTED));
        assert!(!can_transition(STATUS_PENDING, STATUS_COMPLETED));
    }

    #[test]
    fn approved_can_be_completed_or_rejected() {
        assert!(can_transition(STATUS_APPROVED, STATUS_COMPLETED));
        assert!(can_transition(STATUS_APPROVED, STATUS_REJECTED));
        assert!(!can_transition(STATUS_APPROVED, STATUS_PENDING));
    }

    #[test]
    fn terminal_states_have_no_edges() {
        for to in [STATUS_PENDING, STATUS_APPROVED, STATUS_COMPLETED, STATUS_REJECTED] {
            assert!(!can_transition(STATUS_COMPLETED, to));
            assert!(!can_transition(STATUS_REJECTED, to));
        }
    }
}
