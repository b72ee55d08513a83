use crate::{
    handler::require_admin,
    middleware::{jwt::auth_middleware, session::session_middleware, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
};
use chrono::Utc;
use shared::{
    domain::{
        requests::{
            CheckOverdueRequest, CreateReservationRequest, SalesReportQuery,
            UpdateReservationStatusRequest,
        },
        responses::{
            ApiResponse, ApprovedCountPayload, RejectedCountPayload, ReservationPayload,
            ReservationsPayload, SalesReportPayload, Session,
        },
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/reservations/",
    tag = "Reservation",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    responses(
        (status = 200, description = "All reservations, newest first, with is_overdue marking", body = ApiResponse<ReservationsPayload>),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn get_reservations(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
) -> Result<impl IntoResponse, HttpError> {
    require_admin(&session)?;

    let response = state.di_container.reservation_service.get_all().await?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/reservations/",
    tag = "Reservation",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    request_body = CreateReservationRequest,
    responses(
        (status = 201, description = "Pending reservation created, stock claimed", body = ApiResponse<ReservationPayload>),
        (status = 400, description = "Validation error or insufficient stock"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn create_reservation(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateReservationRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .reservation_service
        .create(user_id, &body)
        .await?;

    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    post,
    path = "/reservations/check-overdue",
    tag = "Reservation",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    request_body = CheckOverdueRequest,
    responses(
        (status = 200, description = "Expired approved reservations auto-cancelled", body = ApiResponse<RejectedCountPayload>),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn check_overdue(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    SimpleValidatedJson(body): SimpleValidatedJson<CheckOverdueRequest>,
) -> Result<impl IntoResponse, HttpError> {
    require_admin(&session)?;

    let response = state
        .di_container
        .reservation_service
        .check_overdue(&body)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/reservations/process-pending",
    tag = "Reservation",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    responses(
        (status = 200, description = "Every pending reservation approved", body = ApiResponse<ApprovedCountPayload>),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn process_pending(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
) -> Result<impl IntoResponse, HttpError> {
    require_admin(&session)?;

    let response = state
        .di_container
        .reservation_service
        .process_pending()
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/reservations/{id}/status",
    tag = "Reservation",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Reservation ID")),
    request_body = UpdateReservationStatusRequest,
    responses(
        (status = 200, description = "Transition applied", body = ApiResponse<ReservationPayload>),
        (status = 404, description = "Reservation not found"),
        (status = 422, description = "Transition not allowed by the status machine")
    )
)]
pub async fn update_reservation_status(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateReservationStatusRequest>,
) -> Result<impl IntoResponse, HttpError> {
    require_admin(&session)?;

    let response = state
        .di_container
        .reservation_service
        .update_status(id, &body)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/reservations/user/{id}",
    tag = "Reservation",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "That user's reservations with is_overdue marking", body = ApiResponse<ReservationsPayload>),
        (status = 403, description = "Not your reservations")
    )
)]
pub async fn get_user_reservations(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    if session.user_id != id && !session.is_admin() {
        return Err(HttpError::Forbidden(
            "You can only view your own reservations".to_string(),
        ));
    }

    let response = state
        .di_container
        .reservation_service
        .get_by_user(id)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/reservations/cancel/{id}",
    tag = "Reservation",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation cancelled, stock released", body = ApiResponse<ReservationPayload>),
        (status = 403, description = "Not your reservation"),
        (status = 422, description = "Reservation is already terminal")
    )
)]
pub async fn cancel_reservation(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<i32>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .reservation_service
        .cancel(id, user_id)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/reservations/complete/{id}",
    tag = "Reservation",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Pickup confirmed", body = ApiResponse<ReservationPayload>),
        (status = 403, description = "Not your reservation"),
        (status = 422, description = "Not approved, or pickup window expired")
    )
)]
pub async fn complete_reservation(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<i32>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .reservation_service
        .complete(id, user_id)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/reservations/sales-report",
    tag = "Reservation",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    params(SalesReportQuery),
    responses(
        (status = 200, description = "Completed reservations for the day", body = ApiResponse<SalesReportPayload>),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn sales_report(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Query(params): Query<SalesReportQuery>,
) -> Result<impl IntoResponse, HttpError> {
    require_admin(&session)?;

    let date = params.date.unwrap_or_else(|| Utc::now().date_naive());

    let response = state
        .di_container
        .reservation_service
        .sales_report(date)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/reservations/sales-report/export",
    tag = "Reservation",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    params(SalesReportQuery),
    responses(
        (status = 200, description = "The day's report as a CSV attachment; header row only when empty", content_type = "text/csv"),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn sales_report_export(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Query(params): Query<SalesReportQuery>,
) -> Result<impl IntoResponse, HttpError> {
    require_admin(&session)?;

    let date = params.date.unwrap_or_else(|| Utc::now().date_naive());

    let csv = state
        .di_container
        .reservation_service
        .sales_report_csv(date)
        .await?;

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"sales-report-{date}.csv\""),
        ),
    ];

    Ok((StatusCode::OK, headers, csv))
}

pub fn reservation_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    // GET and POST share "/reservations/", so the whole family carries the
    // auth and session layers and the review/sweep handlers check the admin
    // role themselves.
    OpenApiRouter::new()
        .route("/reservations/", get(get_reservations))
        .route("/reservations/", post(create_reservation))
        .route("/reservations/check-overdue", post(check_overdue))
        .route("/reservations/process-pending", post(process_pending))
        .route("/reservations/{id}/status", put(update_reservation_status))
        .route("/reservations/user/{id}", get(get_user_reservations))
        .route("/reservations/cancel/{id}", post(cancel_reservation))
        .route("/reservations/complete/{id}", post(complete_reservation))
        .route("/reservations/sales-report", get(sales_report))
        .route("/reservations/sales-report/export", get(sales_report_export))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            session_middleware,
        ))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.jwt_config.clone()))
        .with_state(app_state)
}
