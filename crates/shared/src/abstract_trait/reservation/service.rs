use crate::{
    domain::{
        requests::{
            CheckOverdueRequest, CreateReservationRequest, UpdateReservationStatusRequest,
        },
        responses::{
            ApiResponse, ApprovedCountPayload, RejectedCountPayload, ReservationPayload,
            ReservationsPayload, SalesReportPayload,
        },
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

pub type DynReservationService = Arc<dyn ReservationServiceTrait + Send + Sync>;

#[async_trait]
pub trait ReservationServiceTrait {
    async fn get_all(&self) -> Result<ApiResponse<ReservationsPayload>, ServiceError>;
    async fn get_by_user(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<ReservationsPayload>, ServiceError>;
    async fn create(
        &self,
        user_id: i32,
        req: &CreateReservationRequest,
    ) -> Result<ApiResponse<ReservationPayload>, ServiceError>;
    async fn update_status(
        &self,
        id: i32,
        req: &UpdateReservationStatusRequest,
    ) -> Result<ApiResponse<ReservationPayload>, ServiceError>;

    /// Customer cancellation of their own pending or approved reservation.
    async fn cancel(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<ApiResponse<ReservationPayload>, ServiceError>;

    /// Customer pickup confirmation; refused for overdue reservations.
    async fn complete(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<ApiResponse<ReservationPayload>, ServiceError>;
    async fn check_overdue(
        &self,
        req: &CheckOverdueRequest,
    ) -> Result<ApiResponse<RejectedCountPayload>, ServiceError>;
    async fn process_pending(&self)
    -> Result<ApiResponse<ApprovedCountPayload>, ServiceError>;
    async fn sales_report(
        &self,
        date: NaiveDate,
    ) -> Result<ApiResponse<SalesReportPayload>, ServiceError>;

    /// The same day's report rendered as CSV for download.
    async fn sales_report_csv(&self, date: NaiveDate) -> Result<String, ServiceError>;
}
