use crate::{
    domain::{
        requests::ReportQuery,
        responses::{
            ApiResponse, CategoriesPayload, CategoryBreakdown, IncubateeBreakdown,
            IncubateeSummariesPayload, PreviewPayload, ReportRow, SummaryPayload,
        },
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynReportRepository = Arc<dyn ReportRepositoryTrait + Send + Sync>;

/// Read-only aggregations over completed reservations, filtered by date
/// range, incubatee and category.
#[async_trait]
pub trait ReportRepositoryTrait {
    async fn sales_rows(&self, filter: &ReportQuery) -> Result<Vec<ReportRow>, RepositoryError>;
    async fn category_breakdown(
        &self,
        filter: &ReportQuery,
    ) -> Result<Vec<CategoryBreakdown>, RepositoryError>;
    async fn incubatee_breakdown(
        &self,
        filter: &ReportQuery,
    ) -> Result<Vec<IncubateeBreakdown>, RepositoryError>;

    /// (total_sales, total_orders, units_sold, distinct products_sold).
    async fn summary_totals(
        &self,
        filter: &ReportQuery,
    ) -> Result<(f64, i64, i64, i64), RepositoryError>;
    async fn distinct_categories(&self) -> Result<Vec<String>, RepositoryError>;
}

pub type DynReportService = Arc<dyn ReportServiceTrait + Send + Sync>;

#[async_trait]
pub trait ReportServiceTrait {
    async fn summary(&self, filter: &ReportQuery)
    -> Result<ApiResponse<SummaryPayload>, ServiceError>;
    async fn preview(&self, filter: &ReportQuery)
    -> Result<ApiResponse<PreviewPayload>, ServiceError>;

    /// Preview rows rendered as an RFC 4180 CSV body.
    async fn export_csv(&self, filter: &ReportQuery) -> Result<String, ServiceError>;
    async fn incubatee_options(
        &self,
    ) -> Result<ApiResponse<IncubateeSummariesPayload>, ServiceError>;
    async fn categories(&self) -> Result<ApiResponse<CategoriesPayload>, ServiceError>;
}
