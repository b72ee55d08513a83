use crate::{
    middleware::{jwt::auth_middleware, session::session_middleware, validate::SimpleValidatedJson},
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
        requests::{ChangePasswordRequest, UpdateProfileRequest},
        responses::{ApiResponse, MessageResponse, StatsPayload, UserPayload},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/user/current",
    tag = "User",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    responses(
        (status = 200, description = "The signed-in user", body = ApiResponse<UserPayload>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_current_user(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state.di_container.user_service.get_user(user_id).await?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/user/profile",
    tag = "User",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile of the signed-in user", body = ApiResponse<UserPayload>)
    )
)]
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state.di_container.user_service.get_user(user_id).await?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/user/profile",
    tag = "User",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = ApiResponse<UserPayload>),
        (status = 409, description = "Username or email already taken")
    )
)]
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateProfileRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .user_service
        .update_profile(user_id, &body)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/user/stats",
    tag = "User",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    responses(
        (status = 200, description = "Reservation counts by status for the signed-in user", body = ApiResponse<StatsPayload>)
    )
)]
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state.di_container.user_service.get_stats(user_id).await?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/user/change-password",
    tag = "User",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = MessageResponse),
        (status = 403, description = "Current password is incorrect")
    )
)]
pub async fn change_password(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<ChangePasswordRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .user_service
        .change_password(user_id, &body)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

pub fn user_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/user/current", get(get_current_user))
        .route("/user/profile", get(get_profile))
        .route("/user/profile", post(update_profile))
        .route("/user/stats", get(get_stats))
        .route("/user/change-password", post(change_password))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            session_middleware,
        ))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.jwt_config.clone()))
        .with_state(app_state)
}
