use crate::{
    abstract_trait::{
        DynEmailService, DynIncubateeQueryRepository, DynProductCommandRepository,
        DynProductQueryRepository, LowStockEmail, LowStockEmailItem, ProductServiceTrait,
    },
    domain::{
        requests::{CreateProductRequest, FindAllProducts},
        responses::{
            ApiResponse, LOW_STOCK_THRESHOLD, LowStockPayload, MessageResponse,
            NotificationPayload, ProductPayload, ProductResponse, ProductsPayload,
            classify_stock,
        },
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{error, info, warn};
use validator::Validate;

const FEATURED_LIMIT: i64 = 12;

#[derive(Clone)]
pub struct ProductService {
    query: DynProductQueryRepository,
    command: DynProductCommandRepository,
    incubatee_query: DynIncubateeQueryRepository,
    email: DynEmailService,
    upload_dir: String,
}

impl ProductService {
    pub fn new(
        query: DynProductQueryRepository,
        command: DynProductCommandRepository,
        incubatee_query: DynIncubateeQueryRepository,
        email: DynEmailService,
        upload_dir: String,
    ) -> Self {
        Self {
            query,
            command,
            incubatee_query,
            email,
            upload_dir,
        }
    }

    async fn remove_image_file(&self, web_path: &str) {
        let Some(rel) = web_path.strip_prefix("/uploads/") else {
            return;
        };
        let disk_path = PathBuf::from(&self.upload_dir).join(rel);
        if let Err(e) = tokio::fs::remove_file(&disk_path).await {
            warn!("⚠️ Could not remove image {}: {}", disk_path.display(), e);
        }
    }
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn get_products(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponse<ProductsPayload>, ServiceError> {
        info!(
            "🔍 Listing products (search: '{}', low_stock: {})",
            req.search, req.low_stock
        );

        let rows = self.query.find_all(req).await?;
        let products = rows.into_iter().map(ProductResponse::from).collect();

        Ok(ApiResponse::ok(ProductsPayload { products }))
    }

    async fn get_featured(&self) -> Result<ApiResponse<ProductsPayload>, ServiceError> {
        info!("🎠 Fetching featured products");

        let rows = self.query.find_featured(FEATURED_LIMIT).await?;
        let products = rows.into_iter().map(ProductResponse::from).collect();

        Ok(ApiResponse::ok(ProductsPayload { products }))
    }

    async fn create_product(
        &self,
        req: &CreateProductRequest,
        image_path: Option<String>,
    ) -> Result<ApiResponse<ProductPayload>, ServiceError> {
        info!("📝 Creating product: {}", req.name);

        req.validate().map_err(ServiceError::from_validation)?;

        self.incubatee_query
            .find_by_id(req.incubatee_id)
            .await?
            .ok_or_else(|| {
                ServiceError::Repo(RepositoryError::ForeignKey(
                    "product references a missing incubatee".into(),
                ))
            })?;

        let product = self.command.create(req, image_path).await?;

        // Re-read through the join so the response carries the company name
        let created = self
            .query
            .find_with_incubatee(product.product_id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        Ok(ApiResponse::with_message(
            "Product added successfully",
            ProductPayload {
                product: created.into(),
            },
        ))
    }

    async fn delete_product(&self, id: i32) -> Result<MessageResponse, ServiceError> {
        info!("🗑️ Deleting product: {}", id);

        let product = self.command.delete(id).await?;

        if let Some(web_path) = &product.image_path {
            self.remove_image_file(web_path).await;
        }

        Ok(MessageResponse::new("Product deleted successfully"))
    }

    async fn check_low_stock(&self) -> Result<ApiResponse<LowStockPayload>, ServiceError> {
        info!("📉 Checking low-stock products");

        let rows = self.query.find_low_stock(LOW_STOCK_THRESHOLD).await?;
        let products: Vec<ProductResponse> = rows.into_iter().map(ProductResponse::from).collect();

        let critical_count = products
            .iter()
            .filter(|p| p.stock_level.as_deref() == Some("critical"))
            .count();
        let low_count = products
            .iter()
            .filter(|p| p.stock_level.as_deref() == Some("low"))
            .count();

        Ok(ApiResponse::ok(LowStockPayload {
            products,
            critical_count,
            low_count,
        }))
    }

    async fn send_low_stock_notifications(
        &self,
    ) -> Result<ApiResponse<NotificationPayload>, ServiceError> {
        info!("📧 Sending low-stock notifications");

        let rows = self.query.find_low_stock(LOW_STOCK_THRESHOLD).await?;

        // One email per incubatee, listing all of their affected products
        let mut by_incubatee: BTreeMap<i32, Vec<LowStockEmailItem>> = BTreeMap::new();
        for row in &rows {
            let level = classify_stock(row.stock_amount).unwrap_or("low").to_string();
            by_incubatee
                .entry(row.incubatee_id)
                .or_default()
                .push(LowStockEmailItem {
                    name: row.name.clone(),
                    stock_amount: row.stock_amount,
                    level,
                });
        }

        let mut sent_count = 0;
        let mut failed_count = 0;

        for (incubatee_id, items) in by_incubatee {
            let Some(incubatee) = self.incubatee_query.find_by_id(incubatee_id).await? else {
                warn!("⚠️ Low-stock products reference missing incubatee {}", incubatee_id);
                failed_count += 1;
                continue;
            };

            let notice = LowStockEmail {
                to: incubatee.email,
                company_name: incubatee.company_name,
                items,
            };

            match self.email.send_low_stock(&notice).await {
                Ok(()) => sent_count += 1,
                Err(e) => {
                    error!("❌ Failed to notify {}: {}", notice.company_name, e);
                    failed_count += 1;
                }
            }
        }

        Ok(ApiResponse::with_message(
            format!("{sent_count} notification(s) sent"),
            NotificationPayload {
                sent_count,
                failed_count,
            },
        ))
    }
}
