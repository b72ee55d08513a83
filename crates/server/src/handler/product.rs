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
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post},
};
use chrono::NaiveDate;
use shared::{
    domain::{
        requests::{CreateProductRequest, FindAllProducts},
        responses::{
            ApiResponse, LowStockPayload, MessageResponse, NotificationPayload, ProductPayload,
            ProductsPayload,
        },
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/admin/get-products",
    tag = "Product",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    params(FindAllProducts),
    responses(
        (status = 200, description = "Inventory listing, newest first", body = ApiResponse<ProductsPayload>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn get_products(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FindAllProducts>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .product_service
        .get_products(&params)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/products/featured",
    tag = "Product",
    responses(
        (status = 200, description = "Carousel products from approved incubatees", body = ApiResponse<ProductsPayload>)
    )
)]
pub async fn get_featured_products(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state.di_container.product_service.get_featured().await?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/admin/add-product",
    tag = "Product",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    request_body(content = CreateProductRequest, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductPayload>),
        (status = 400, description = "Validation error or bad image"),
        (status = 409, description = "Referenced incubatee does not exist")
    )
)]
pub async fn add_product(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, HttpError> {
    let mut incubatee_id: Option<i32> = None;
    let mut name = String::new();
    let mut stock_no: Option<String> = None;
    let mut category = String::new();
    let mut products: Option<String> = None;
    let mut stock_amount: Option<i32> = None;
    let mut price_per_stocks: Option<f64> = None;
    let mut pricing_unit = String::new();
    let mut expiration_date: Option<NaiveDate> = None;
    let mut warranty: Option<String> = None;
    let mut image_path: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        match field.name().unwrap_or_default() {
            "image" => {
                image_path =
                    Some(upload::save_image(field, &state.config.upload_dir, "products").await?);
            }
            "incubatee_id" => {
                let value = field.text().await.map_err(multipart_error)?;
                incubatee_id = Some(value.trim().parse().map_err(|_| {
                    HttpError::BadRequest("Invalid value for 'incubatee_id'".to_string())
                })?);
            }
            "name" => name = field.text().await.map_err(multipart_error)?,
            "stock_no" => stock_no = optional(field.text().await.map_err(multipart_error)?),
            "category" => category = field.text().await.map_err(multipart_error)?,
            "products" => products = optional(field.text().await.map_err(multipart_error)?),
            "stock_amount" => {
                let value = field.text().await.map_err(multipart_error)?;
                stock_amount = Some(value.trim().parse().map_err(|_| {
                    HttpError::BadRequest("Invalid value for 'stock_amount'".to_string())
                })?);
            }
            "price_per_stocks" => {
                let value = field.text().await.map_err(multipart_error)?;
                price_per_stocks = Some(value.trim().parse().map_err(|_| {
                    HttpError::BadRequest("Invalid value for 'price_per_stocks'".to_string())
                })?);
            }
            "pricing_unit" => pricing_unit = field.text().await.map_err(multipart_error)?,
            "expiration_date" => {
                if let Some(value) = optional(field.text().await.map_err(multipart_error)?) {
                    expiration_date =
                        Some(NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| {
                            HttpError::BadRequest(
                                "Invalid value for 'expiration_date'".to_string(),
                            )
                        })?);
                }
            }
            "warranty" => warranty = optional(field.text().await.map_err(multipart_error)?),
            _ => {}
        }
    }

    let req = CreateProductRequest {
        incubatee_id: incubatee_id.ok_or_else(|| {
            HttpError::BadRequest("Missing form field 'incubatee_id'".to_string())
        })?,
        name,
        stock_no,
        category,
        products,
        stock_amount: stock_amount.ok_or_else(|| {
            HttpError::BadRequest("Missing form field 'stock_amount'".to_string())
        })?,
        price_per_stocks: price_per_stocks.ok_or_else(|| {
            HttpError::BadRequest("Missing form field 'price_per_stocks'".to_string())
        })?,
        pricing_unit,
        expiration_date,
        warranty,
    };

    let response = state
        .di_container
        .product_service
        .create_product(&req, image_path)
        .await?;

    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/admin/delete-product/{id}",
    tag = "Product",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state.di_container.product_service.delete_product(id).await?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/admin/check-low-stock",
    tag = "Product",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    responses(
        (status = 200, description = "Products at or below the low-stock threshold", body = ApiResponse<LowStockPayload>)
    )
)]
pub async fn check_low_stock(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state.di_container.product_service.check_low_stock().await?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/admin/send-low-stock-notifications",
    tag = "Product",
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    responses(
        (status = 200, description = "One email per affected incubatee", body = ApiResponse<NotificationPayload>)
    )
)]
pub async fn send_low_stock_notifications(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .product_service
        .send_low_stock_notifications()
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public_routes =
        OpenApiRouter::new().route("/products/featured", get(get_featured_products));

    let admin_routes = OpenApiRouter::new()
        .route("/admin/get-products", get(get_products))
        .route("/admin/add-product", post(add_product))
        .route("/admin/delete-product/{id}", delete(delete_product))
        .route("/admin/check-low-stock", get(check_low_stock))
        .route(
            "/admin/send-low-stock-notifications",
            post(send_low_stock_notifications),
        )
        .route_layer(middleware::from_fn(admin_middleware))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            session_middleware,
        ))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.jwt_config.clone()));

    public_routes.merge(admin_routes).with_state(app_state)
}
