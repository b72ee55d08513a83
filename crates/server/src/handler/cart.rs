use crate::{
    middleware::{jwt::auth_middleware, session::session_middleware, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    middleware,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use shared::{
    domain::{
        requests::AddToCartRequest,
        responses::{ApiResponse, CartCountPayload},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/cart/",
    tag = "Cart",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    responses(
        (status = 200, description = "The cart overlay as an HTML fragment", content_type = "text/html")
    )
)]
pub async fn get_cart_overlay(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let fragment = state
        .di_container
        .cart_service
        .render_overlay(user_id)
        .await?;

    Ok((StatusCode::OK, Html(fragment)))
}

#[utoipa::path(
    post,
    path = "/cart/add",
    tag = "Cart",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Item upserted, capped at available stock", body = ApiResponse<CartCountPayload>),
        (status = 400, description = "Product is out of stock"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn add_to_cart(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<AddToCartRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .cart_service
        .add_item(user_id, &body)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/cart/count",
    tag = "Cart",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    responses(
        (status = 200, description = "Distinct-item count for the badge", body = ApiResponse<CartCountPayload>)
    )
)]
pub async fn get_cart_count(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state.di_container.cart_service.count(user_id).await?;

    Ok((StatusCode::OK, Json(response)))
}

pub fn cart_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/cart/", get(get_cart_overlay))
        .route("/cart/add", post(add_to_cart))
        .route("/cart/count", get(get_cart_count))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            session_middleware,
        ))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.jwt_config.clone()))
        .with_state(app_state)
}
