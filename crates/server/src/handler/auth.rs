use crate::{middleware::validate::SimpleValidatedJson, state::AppState};
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Duration;
use shared::{
    domain::{
        requests::{LoginRequest, RegisterRequest},
        responses::{
            ApiResponse, AuthCheckPayload, MessageResponse, Session, SessionUserResponse,
            UserPayload,
        },
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<UserPayload>),
        (status = 401, description = "Invalid credentials"),
        (status = 403, description = "Account temporarily locked out")
    ),
    tag = "Auth"
)]
pub async fn login_user_handler(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    SimpleValidatedJson(body): SimpleValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let (token, user) = state.di_container.auth_service.login(&body).await?;

    let session = Session {
        user_id: user.id,
        username: user.username.clone(),
        role: user.role.clone(),
    };
    let ttl = Duration::seconds(state.config.session_ttl_secs as i64);

    if !state
        .session_store
        .create_session(user.id, &session, ttl)
        .await
    {
        return Err(HttpError::Internal("Failed to persist session".to_string()));
    }

    let cookie = Cookie::build(("token", token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    let response = ApiResponse::with_message("Login successful", UserPayload { user });

    Ok((jar.add(cookie), (StatusCode::OK, Json(response))))
}

#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<UserPayload>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username or email already taken")
    ),
    tag = "Auth"
)]
pub async fn register_user_handler(
    State(state): State<Arc<AppState>>,
    SimpleValidatedJson(body): SimpleValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let user = state.di_container.auth_service.register(&body).await?;

    let response = ApiResponse::with_message("Registration successful", UserPayload { user });

    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/auth/check",
    responses(
        (status = 200, description = "Session probe; always 200", body = ApiResponse<AuthCheckPayload>)
    ),
    tag = "Auth"
)]
pub async fn auth_check_handler(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Result<impl IntoResponse, HttpError> {
    let token = jar
        .get("token")
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            headers
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .and_then(|auth_value| auth_value.strip_prefix("Bearer ").map(str::to_owned))
        });

    // Pollers branch on the flag, so bad or missing credentials are a
    // regular 200 here, never a 401.
    let user = match token {
        Some(token) => match state.jwt_config.verify_token(&token, "access") {
            Ok(user_id) => state
                .session_store
                .get_session(user_id)
                .await
                .map(SessionUserResponse::from),
            Err(_) => None,
        },
        None => None,
    };

    let payload = AuthCheckPayload {
        authenticated: user.is_some(),
        user,
    };

    Ok((StatusCode::OK, Json(ApiResponse::ok(payload))))
}

#[utoipa::path(
    get,
    path = "/login/logout",
    responses(
        (status = 200, description = "Session deleted, cookie expired", body = MessageResponse)
    ),
    tag = "Auth"
)]
pub async fn logout_handler(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<impl IntoResponse, HttpError> {
    if let Some(token) = jar.get("token").map(|cookie| cookie.value().to_string())
        && let Ok(user_id) = state.jwt_config.verify_token(&token, "access")
    {
        state.session_store.delete_session(user_id).await;
    }

    let removal = Cookie::build(("token", "")).path("/").build();

    Ok((
        jar.remove(removal),
        (
            StatusCode::OK,
            Json(MessageResponse::new("Logged out successfully")),
        ),
    ))
}

pub fn auth_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/login", post(login_user_handler))
        .route("/register", post(register_user_handler))
        .route("/login/logout", get(logout_handler))
        .route("/auth/check", get(auth_check_handler))
        .with_state(app_state)
}
