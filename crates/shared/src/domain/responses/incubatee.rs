use crate::model::{Incubatee, IncubateeWithStats};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct IncubateeResponse {
    pub id: i32,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub batch: String,
    pub is_approved: bool,
    pub logo_path: Option<String>,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
}

// model to response
impl From<Incubatee> for IncubateeResponse {
    fn from(value: Incubatee) -> Self {
        IncubateeResponse {
            id: value.incubatee_id,
            first_name: value.first_name,
            middle_name: value.middle_name,
            last_name: value.last_name,
            company_name: value.company_name,
            email: value.email,
            phone: value.phone,
            batch: value.batch,
            is_approved: value.is_approved,
            logo_path: value.logo_path,
            created_at: value.created_at.map(|dt| dt.to_string()),
        }
    }
}

/// Dropdown entry for the product form and the report filter.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct IncubateeSummaryResponse {
    pub id: i32,
    pub company_name: String,
}

impl From<Incubatee> for IncubateeSummaryResponse {
    fn from(value: Incubatee) -> Self {
        IncubateeSummaryResponse {
            id: value.incubatee_id,
            company_name: value.company_name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct IncubateeStatsResponse {
    pub id: i32,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub batch: String,
    pub is_approved: bool,
    pub logo_path: Option<String>,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
    pub product_count: i64,
    pub total_sales: f64,
}

// model to response
impl From<IncubateeWithStats> for IncubateeStatsResponse {
    fn from(value: IncubateeWithStats) -> Self {
        IncubateeStatsResponse {
            id: value.incubatee_id,
            first_name: value.first_name,
            middle_name: value.middle_name,
            last_name: value.last_name,
            company_name: value.company_name,
            email: value.email,
            phone: value.phone,
            batch: value.batch,
            is_approved: value.is_approved,
            logo_path: value.logo_path,
            created_at: value.created_at.map(|dt| dt.to_string()),
            product_count: value.product_count,
            total_sales: value.total_sales,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct IncubateeSummariesPayload {
    pub incubatees: Vec<IncubateeSummaryResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct IncubateeStatsListPayload {
    pub incubatees: Vec<IncubateeStatsResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct IncubateePayload {
    pub incubatee: IncubateeResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ApprovalPayload {
    pub is_approved: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct LogoPayload {
    pub logo_path: Option<String>,
}
