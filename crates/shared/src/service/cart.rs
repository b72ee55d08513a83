use crate::{
    abstract_trait::{CartServiceTrait, DynCartRepository, DynProductQueryRepository},
    domain::{
        requests::AddToCartRequest,
        responses::{ApiResponse, CartCountPayload},
    },
    errors::{RepositoryError, ServiceError},
    utils::{CartRow, format_money, render_cart},
};
use async_trait::async_trait;
use tracing::info;
use validator::Validate;

#[derive(Clone)]
pub struct CartService {
    repository: DynCartRepository,
    product_query: DynProductQueryRepository,
}

impl CartService {
    pub fn new(repository: DynCartRepository, product_query: DynProductQueryRepository) -> Self {
        Self {
            repository,
            product_query,
        }
    }
}

#[async_trait]
impl CartServiceTrait for CartService {
    async fn render_overlay(&self, user_id: i32) -> Result<String, ServiceError> {
        info!("🛒 Rendering cart overlay for user: {}", user_id);

        let items = self.repository.find_items(user_id).await?;

        let mut total = 0.0;
        let rows: Vec<CartRow> = items
            .into_iter()
            .map(|item| {
                let line_total = item.price_per_stocks * f64::from(item.quantity);
                total += line_total;
                CartRow {
                    name: item.product_name,
                    quantity: item.quantity,
                    unit_price: format_money(item.price_per_stocks),
                    line_total: format_money(line_total),
                }
            })
            .collect();

        Ok(render_cart(&rows, total)?)
    }

    async fn add_item(
        &self,
        user_id: i32,
        req: &AddToCartRequest,
    ) -> Result<ApiResponse<CartCountPayload>, ServiceError> {
        info!(
            "🛒 Adding product {} x{} to cart for user {}",
            req.product_id, req.quantity, user_id
        );

        req.validate().map_err(ServiceError::from_validation)?;

        let product = self
            .product_query
            .find_by_id(req.product_id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        if product.stock_amount <= 0 {
            return Err(ServiceError::InsufficientStock {
                requested: req.quantity,
                available: 0,
            });
        }

        self.repository
            .upsert_item(user_id, req.product_id, req.quantity, product.stock_amount)
            .await?;

        let count = self.repository.count_items(user_id).await?;

        Ok(ApiResponse::with_message(
            "Added to cart",
            CartCountPayload { count },
        ))
    }

    async fn count(&self, user_id: i32) -> Result<ApiResponse<CartCountPayload>, ServiceError> {
        let count = self.repository.count_items(user_id).await?;

        Ok(ApiResponse::ok(CartCountPayload { count }))
    }
}
