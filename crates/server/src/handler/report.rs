use crate::{
    middleware::{
        jwt::auth_middleware,
        session::{admin_middleware, session_middleware},
    },
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Query, State},
    http::{StatusCode, header},
    middleware,
    response::IntoResponse,
    routing::get,
};
use shared::{
    domain::{
        requests::ReportQuery,
        responses::{
            ApiResponse, CategoriesPayload, IncubateeSummariesPayload, PreviewPayload,
            SummaryPayload,
        },
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/admin/reports/sales-summary",
    tag = "Report",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    params(ReportQuery),
    responses(
        (status = 200, description = "Totals plus per-category and per-incubatee breakdowns", body = ApiResponse<SummaryPayload>)
    )
)]
pub async fn sales_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReportQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state.di_container.report_service.summary(&params).await?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/admin/reports/preview",
    tag = "Report",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    params(ReportQuery),
    responses(
        (status = 200, description = "Row-level line items, newest first", body = ApiResponse<PreviewPayload>)
    )
)]
pub async fn report_preview(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReportQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state.di_container.report_service.preview(&params).await?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/admin/reports/export",
    tag = "Report",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    params(ReportQuery),
    responses(
        (status = 200, description = "Preview rows as a CSV attachment; header row always present", content_type = "text/csv")
    )
)]
pub async fn report_export(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReportQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let csv = state.di_container.report_service.export_csv(&params).await?;

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"sales-report.csv\"".to_string(),
        ),
    ];

    Ok((StatusCode::OK, headers, csv))
}

#[utoipa::path(
    get,
    path = "/admin/reports/get-incubatees",
    tag = "Report",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    responses(
        (status = 200, description = "Incubatee filter options", body = ApiResponse<IncubateeSummariesPayload>)
    )
)]
pub async fn report_incubatees(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .report_service
        .incubatee_options()
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/admin/reports/get-categories",
    tag = "Report",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    responses(
        (status = 200, description = "Distinct product categories", body = ApiResponse<CategoriesPayload>)
    )
)]
pub async fn report_categories(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state.di_container.report_service.categories().await?;

    Ok((StatusCode::OK, Json(response)))
}

pub fn report_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/admin/reports/sales-summary", get(sales_summary))
        .route("/admin/reports/preview", get(report_preview))
        .route("/admin/reports/export", get(report_export))
        .route("/admin/reports/get-incubatees", get(report_incubatees))
        .route("/admin/reports/get-categories", get(report_categories))
        .route_layer(middleware::from_fn(admin_middleware))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            session_middleware,
        ))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.jwt_config.clone()))
        .with_state(app_state)
}
