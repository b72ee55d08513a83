use crate::{
    handler::{multipart_error, optional},
    middleware::{
        jwt::auth_middleware,
        session::{admin_middleware, session_middleware},
    },
    state::AppState,
    upload,
};
use axum::{
    Extension, Json,
    body::Body,
    extract::{FromRequest, Multipart, Path, State},
    http::{Request, StatusCode, header},
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    domain::{
        requests::{CreateIncubateeRequest, UpdateIncubateeRequest},
        responses::{
            ApiResponse, ApprovalPayload, IncubateePayload, IncubateeStatsListPayload,
            IncubateeSummariesPayload, LogoPayload,
        },
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

/// Collects the incubatee form fields and an optional logo upload. Every
/// field is optional here; create fills the blanks and lets validation
/// report what is missing.
async fn parse_incubatee_form(
    state: &AppState,
    mut multipart: Multipart,
) -> Result<(UpdateIncubateeRequest, Option<String>), HttpError> {
    let mut form = UpdateIncubateeRequest::default();
    let mut logo_path = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        match field.name().unwrap_or_default() {
            "logo" => {
                logo_path =
                    Some(upload::save_image(field, &state.config.upload_dir, "incubatees").await?);
            }
            "first_name" => {
                form.first_name = optional(field.text().await.map_err(multipart_error)?)
            }
            "middle_name" => {
                form.middle_name = optional(field.text().await.map_err(multipart_error)?)
            }
            "last_name" => form.last_name = optional(field.text().await.map_err(multipart_error)?),
            "company_name" => {
                form.company_name = optional(field.text().await.map_err(multipart_error)?)
            }
            "email" => form.email = optional(field.text().await.map_err(multipart_error)?),
            "phone" => form.phone = optional(field.text().await.map_err(multipart_error)?),
            "batch" => form.batch = optional(field.text().await.map_err(multipart_error)?),
            _ => {}
        }
    }

    Ok((form, logo_path))
}

#[utoipa::path(
    get,
    path = "/admin/get-incubatees",
    tag = "Incubatee",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    responses(
        (status = 200, description = "Id and company name for dropdowns, alphabetical", body = ApiResponse<IncubateeSummariesPayload>)
    )
)]
pub async fn get_incubatees(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state.di_container.incubatee_service.get_summaries().await?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/admin/get-incubatees-list",
    tag = "Incubatee",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    responses(
        (status = 200, description = "Full records with product_count and total_sales", body = ApiResponse<IncubateeStatsListPayload>)
    )
)]
pub async fn get_incubatees_list(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .incubatee_service
        .get_list_with_stats()
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/admin/add-incubatee",
    tag = "Incubatee",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    request_body = CreateIncubateeRequest,
    responses(
        (status = 201, description = "Incubatee created", body = ApiResponse<IncubateePayload>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn add_incubatee(
    State(state): State<Arc<AppState>>,
    req: Request<Body>,
) -> Result<impl IntoResponse, HttpError> {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    // The admin form posts multipart when a logo is attached and plain
    // JSON otherwise; both shapes land here.
    let (body, logo_path) = if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(req, &())
            .await
            .map_err(|err| HttpError::BadRequest(format!("Invalid multipart payload: {err}")))?;
        let (form, logo_path) = parse_incubatee_form(&state, multipart).await?;

        let body = CreateIncubateeRequest {
            first_name: form.first_name.unwrap_or_default(),
            middle_name: form.middle_name,
            last_name: form.last_name.unwrap_or_default(),
            company_name: form.company_name.unwrap_or_default(),
            email: form.email.unwrap_or_default(),
            phone: form.phone.unwrap_or_default(),
            batch: form.batch.unwrap_or_default(),
        };

        (body, logo_path)
    } else {
        let Json(body) = Json::<CreateIncubateeRequest>::from_request(req, &())
            .await
            .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;

        (body, None)
    };

    let response = state
        .di_container
        .incubatee_service
        .create(&body, logo_path)
        .await?;

    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    post,
    path = "/admin/update-incubatee/{id}",
    tag = "Incubatee",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Incubatee ID")),
    request_body(content = UpdateIncubateeRequest, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Incubatee updated; only supplied fields change", body = ApiResponse<IncubateePayload>),
        (status = 404, description = "Incubatee not found"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn update_incubatee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpError> {
    let (form, logo_path) = parse_incubatee_form(&state, multipart).await?;

    let response = state
        .di_container
        .incubatee_service
        .update(id, &form, logo_path)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/admin/toggle-incubatee-approval/{id}",
    tag = "Incubatee",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Incubatee ID")),
    responses(
        (status = 200, description = "Approval flag flipped", body = ApiResponse<ApprovalPayload>),
        (status = 404, description = "Incubatee not found")
    )
)]
pub async fn toggle_incubatee_approval(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .incubatee_service
        .toggle_approval(id)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/admin/get-incubatee-logo/{id}",
    tag = "Incubatee",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Incubatee ID")),
    responses(
        (status = 200, description = "Stored logo path", body = ApiResponse<LogoPayload>),
        (status = 404, description = "Incubatee not found")
    )
)]
pub async fn get_incubatee_logo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state.di_container.incubatee_service.get_logo(id).await?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/admin/get-incubatee-details/{id}",
    tag = "Incubatee",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Incubatee ID")),
    responses(
        (status = 200, description = "Full incubatee record", body = ApiResponse<IncubateePayload>),
        (status = 404, description = "Incubatee not found")
    )
)]
pub async fn get_incubatee_details(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state.di_container.incubatee_service.get_details(id).await?;

    Ok((StatusCode::OK, Json(response)))
}

pub fn incubatee_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/admin/get-incubatees", get(get_incubatees))
        .route("/admin/get-incubatees-list", get(get_incubatees_list))
        .route("/admin/add-incubatee", post(add_incubatee))
        .route("/admin/update-incubatee/{id}", post(update_incubatee))
        .route(
            "/admin/toggle-incubatee-approval/{id}",
            post(toggle_incubatee_approval),
        )
        .route("/admin/get-incubatee-logo/{id}", get(get_incubatee_logo))
        .route(
            "/admin/get-incubatee-details/{id}",
            get(get_incubatee_details),
        )
        .route_layer(middleware::from_fn(admin_middleware))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            session_middleware,
        ))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.jwt_config.clone()))
        .with_state(app_state)
}
