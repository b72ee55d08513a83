use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

/// Filter set shared by the report summary, preview and export endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
pub struct ReportQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub incubatee_id: Option<i32>,
    pub category: Option<String>,
}
