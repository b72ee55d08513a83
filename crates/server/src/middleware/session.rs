use crate::state::AppState;
use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::IntoResponse,
};
use chrono::Duration;
use shared::{domain::responses::Session, errors::HttpError};
use std::sync::Arc;

/// Runs after `auth_middleware`: the JWT alone is not enough, the Redis
/// session record must still exist. Loads it, slides its expiry and adds
/// it as a request extension.
pub async fn session_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    let user_id = match req.extensions().get::<i32>() {
        Some(id) => *id,
        None => {
            return Err(HttpError::Unauthorized(
                "Missing user id in request context".to_string(),
            ));
        }
    };

    let session = state
        .session_store
        .get_session(user_id)
        .await
        .ok_or_else(|| HttpError::Unauthorized("Session expired or not found".to_string()))?;

    let ttl = Duration::seconds(state.config.session_ttl_secs as i64);
    state.session_store.refresh_session(user_id, ttl).await;

    req.extensions_mut().insert(session);

    Ok(next.run(req).await)
}

/// Admin gate for the back-office routes; expects the Session extension
/// inserted by `session_middleware`.
pub async fn admin_middleware(
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    let is_admin = req
        .extensions()
        .get::<Session>()
        .map(Session::is_admin)
        .unwrap_or(false);

    if !is_admin {
        return Err(HttpError::Forbidden(
            "Access denied. Required role: admin".to_string(),
        ));
    }

    Ok(next.run(req).await)
}
