use crate::{
    middleware::{
        jwt::auth_middleware,
        session::{admin_middleware, session_middleware},
        validate::SimpleValidatedJson,
    },
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    domain::{
        requests::CreatePricingUnitRequest,
        responses::{ApiResponse, PricingUnitPayload, PricingUnitsPayload},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/admin/get-pricing-units",
    tag = "PricingUnit",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    responses(
        (status = 200, description = "All units, alphabetical", body = ApiResponse<PricingUnitsPayload>)
    )
)]
pub async fn get_pricing_units(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state.di_container.pricing_unit_service.get_units().await?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/admin/add-pricing-unit",
    tag = "PricingUnit",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    request_body = CreatePricingUnitRequest,
    responses(
        (status = 201, description = "Unit created", body = ApiResponse<PricingUnitPayload>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Unit name already exists")
    )
)]
pub async fn add_pricing_unit(
    State(state): State<Arc<AppState>>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreatePricingUnitRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .pricing_unit_service
        .create_unit(&body)
        .await?;

    Ok((StatusCode::CREATED, Json(response)))
}

pub fn pricing_unit_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/admin/get-pricing-units", get(get_pricing_units))
        .route("/admin/add-pricing-unit", post(add_pricing_unit))
        .route_layer(middleware::from_fn(admin_middleware))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            session_middleware,
        ))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.jwt_config.clone()))
        .with_state(app_state)
}
