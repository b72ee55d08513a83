use crate::{
    abstract_trait::{DynIncubateeQueryRepository, DynReportRepository, ReportServiceTrait},
    domain::{
        requests::ReportQuery,
        responses::{
            ApiResponse, CategoriesPayload, IncubateeSummariesPayload, IncubateeSummaryResponse,
            PreviewPayload, ReportTotals, SalesSummaryResponse, SummaryPayload,
        },
    },
    errors::ServiceError,
    utils::{csv_row, format_money},
};
use async_trait::async_trait;
use tracing::info;

#[derive(Clone)]
pub struct ReportService {
    repository: DynReportRepository,
    incubatee_query: DynIncubateeQueryRepository,
}

impl ReportService {
    pub fn new(
        repository: DynReportRepository,
        incubatee_query: DynIncubateeQueryRepository,
    ) -> Self {
        Self {
            repository,
            incubatee_query,
        }
    }
}

#[async_trait]
impl ReportServiceTrait for ReportService {
    async fn summary(
        &self,
        filter: &ReportQuery,
    ) -> Result<ApiResponse<SummaryPayload>, ServiceError> {
        info!("📊 Building sales summary: {:?}", filter);

        let (total_sales, total_orders, units_sold, products_sold) =
            self.repository.summary_totals(filter).await?;
        let by_category = self.repository.category_breakdown(filter).await?;
        let by_incubatee = self.repository.incubatee_breakdown(filter).await?;

        Ok(ApiResponse::ok(SummaryPayload {
            summary: SalesSummaryResponse {
                total_sales,
                total_orders,
                units_sold,
                products_sold,
                by_category,
                by_incubatee,
            },
        }))
    }

    async fn preview(
        &self,
        filter: &ReportQuery,
    ) -> Result<ApiResponse<PreviewPayload>, ServiceError> {
        info!("📊 Building report preview: {:?}", filter);

        let rows = self.repository.sales_rows(filter).await?;

        let totals = ReportTotals {
            total_sales: rows.iter().map(|row| row.subtotal).sum(),
            total_orders: rows.len() as i64,
        };

        Ok(ApiResponse::ok(PreviewPayload { rows, totals }))
    }

    async fn export_csv(&self, filter: &ReportQuery) -> Result<String, ServiceError> {
        info!("📊 Exporting report CSV: {:?}", filter);

        let rows = self.repository.sales_rows(filter).await?;

        let mut csv = csv_row([
            "Date",
            "Product",
            "Incubatee",
            "Category",
            "Quantity",
            "Unit Price",
            "Subtotal",
        ]);

        for row in rows {
            csv.push_str(&csv_row([
                row.date.unwrap_or_default(),
                row.product_name,
                row.company_name,
                row.category,
                row.quantity.to_string(),
                format_money(row.price_per_stocks),
                format_money(row.subtotal),
            ]));
        }

        Ok(csv)
    }

    async fn incubatee_options(
        &self,
    ) -> Result<ApiResponse<IncubateeSummariesPayload>, ServiceError> {
        info!("🔍 Listing incubatee filter options");

        let incubatees = self
            .incubatee_query
            .find_all()
            .await?
            .into_iter()
            .map(IncubateeSummaryResponse::from)
            .collect();

        Ok(ApiResponse::ok(IncubateeSummariesPayload { incubatees }))
    }

    async fn categories(&self) -> Result<ApiResponse<CategoriesPayload>, ServiceError> {
        info!("🔍 Listing category filter options");

        let categories = self.repository.distinct_categories().await?;

        Ok(ApiResponse::ok(CategoriesPayload { categories }))
    }
}
