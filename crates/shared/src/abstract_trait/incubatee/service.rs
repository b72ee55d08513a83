use crate::{
    domain::{
        requests::{CreateIncubateeRequest, UpdateIncubateeRequest},
        responses::{
            ApiResponse, ApprovalPayload, IncubateePayload, IncubateeStatsListPayload,
            IncubateeSummariesPayload, LogoPayload,
        },
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynIncubateeService = Arc<dyn IncubateeServiceTrait + Send + Sync>;

#[async_trait]
pub trait IncubateeServiceTrait {
    async fn get_summaries(&self)
    -> Result<ApiResponse<IncubateeSummariesPayload>, ServiceError>;
    async fn get_list_with_stats(
        &self,
    ) -> Result<ApiResponse<IncubateeStatsListPayload>, ServiceError>;
    async fn create(
        &self,
        req: &CreateIncubateeRequest,
        logo_path: Option<String>,
    ) -> Result<ApiResponse<IncubateePayload>, ServiceError>;
    async fn update(
        &self,
        id: i32,
        req: &UpdateIncubateeRequest,
        logo_path: Option<String>,
    ) -> Result<ApiResponse<IncubateePayload>, ServiceError>;
    async fn toggle_approval(&self, id: i32)
    -> Result<ApiResponse<ApprovalPayload>, ServiceError>;
    async fn get_logo(&self, id: i32) -> Result<ApiResponse<LogoPayload>, ServiceError>;
    async fn get_details(&self, id: i32) -> Result<ApiResponse<IncubateePayload>, ServiceError>;
}
