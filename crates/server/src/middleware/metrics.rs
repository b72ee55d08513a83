use crate::state::AppState;
use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use shared::utils::{Method, Status};
use std::{sync::Arc, time::Instant};

/// Records one counter tick and one latency observation per request,
/// labeled by method and status family. Exposed by `/metrics`.
pub async fn track_metrics(
    State(state): State<Arc<AppState>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = Method::from(req.method());

    let response = next.run(req).await;

    let status = Status::from(response.status());
    let elapsed = start.elapsed().as_secs_f64();
    state.metrics.lock().await.record(method, status, elapsed);

    response
}
