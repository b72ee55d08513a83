mod auth;
mod cart;
mod incubatee;
mod pricing_unit;
mod product;
mod report;
mod reservation;
mod user;

use crate::{middleware::metrics::track_metrics, state::AppState};
use anyhow::Result;
use axum::body::Body;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use prometheus_client::encoding::text::encode;
use shared::{
    domain::responses::Session,
    errors::HttpError,
    utils::shutdown_signal,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, services::ServeDir};
use utoipa::{Modify, OpenApi, openapi::security::SecurityScheme};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::auth::auth_routes;
pub use self::cart::cart_routes;
pub use self::incubatee::incubatee_routes;
pub use self::pricing_unit::pricing_unit_routes;
pub use self::product::product_routes;
pub use self::report::report_routes;
pub use self::reservation::reservation_routes;
pub use self::user::user_routes;

pub(crate) fn multipart_error(err: axum::extract::multipart::MultipartError) -> HttpError {
    HttpError::BadRequest(format!("Invalid multipart payload: {err}"))
}

/// Form fields arrive as empty strings when left blank; treat those as
/// absent so partial updates do not blank columns.
pub(crate) fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub(crate) fn require_admin(session: &Session) -> Result<(), HttpError> {
    if !session.is_admin() {
        return Err(HttpError::Forbidden(
            "Access denied. Required role: admin".to_string(),
        ));
    }

    Ok(())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login_user_handler,
        auth::register_user_handler,
        auth::auth_check_handler,
        auth::logout_handler,

        product::get_products,
        product::get_featured_products,
        product::add_product,
        product::delete_product,
        product::check_low_stock,
        product::send_low_stock_notifications,

        incubatee::get_incubatees,
        incubatee::get_incubatees_list,
        incubatee::add_incubatee,
        incubatee::update_incubatee,
        incubatee::toggle_incubatee_approval,
        incubatee::get_incubatee_logo,
        incubatee::get_incubatee_details,

        pricing_unit::get_pricing_units,
        pricing_unit::add_pricing_unit,

        reservation::get_reservations,
        reservation::create_reservation,
        reservation::check_overdue,
        reservation::process_pending,
        reservation::update_reservation_status,
        reservation::get_user_reservations,
        reservation::cancel_reservation,
        reservation::complete_reservation,
        reservation::sales_report,
        reservation::sales_report_export,

        report::sales_summary,
        report::report_preview,
        report::report_export,
        report::report_incubatees,
        report::report_categories,

        user::get_current_user,
        user::get_profile,
        user::update_profile,
        user::get_stats,
        user::change_password,

        cart::get_cart_overlay,
        cart::add_to_cart,
        cart::get_cart_count,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Authentication and session endpoints"),
        (name = "Product", description = "Product catalog endpoints"),
        (name = "Incubatee", description = "Incubatee management endpoints"),
        (name = "PricingUnit", description = "Pricing unit endpoints"),
        (name = "Reservation", description = "Reservation lifecycle endpoints"),
        (name = "Report", description = "Sales report builder endpoints"),
        (name = "User", description = "User self-service endpoints"),
        (name = "Cart", description = "Cart overlay endpoints"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(utoipa::openapi::security::Http::new(
                utoipa::openapi::security::HttpAuthScheme::Bearer,
            )),
        );

        components.add_security_scheme(
            "cookie_auth",
            SecurityScheme::ApiKey(utoipa::openapi::security::ApiKey::Cookie(
                utoipa::openapi::security::ApiKeyValue::new("token"),
            )),
        );
    }
}

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut buffer = String::new();

    let registry = state.registry.lock().await;

    if let Err(e) = encode(&mut buffer, &registry) {
        return Response::builder()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .body(Body::from(format!("Failed to encode metrics: {e}")))
            .unwrap();
    }

    Response::builder()
        .status(StatusCode::OK)
        .header(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )
        .body(Body::from(buffer))
        .unwrap()
}

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let upload_dir = app_state.config.upload_dir.clone();
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state.clone())
            .merge(auth_routes(shared_state.clone()))
            .merge(product_routes(shared_state.clone()))
            .merge(incubatee_routes(shared_state.clone()))
            .merge(pricing_unit_routes(shared_state.clone()))
            .merge(reservation_routes(shared_state.clone()))
            .merge(report_routes(shared_state.clone()))
            .merge(user_routes(shared_state.clone()))
            .merge(cart_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(middleware::from_fn_with_state(
                shared_state.clone(),
                track_metrics,
            ))
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(8 * 1024 * 1024));

        let (app_router, api) = router_with_layers.split_for_parts();

        let app = app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()))
            .nest_service("/uploads", ServeDir::new(upload_dir));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        println!("🚀 Server running on http://{}", listener.local_addr()?);
        println!("📚 API Documentation available at:");
        println!("   📖 Swagger UI: http://localhost:{port}/swagger-ui");
        println!("   📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
