use crate::{
    abstract_trait::{DynPricingUnitRepository, PricingUnitServiceTrait},
    domain::{
        requests::CreatePricingUnitRequest,
        responses::{ApiResponse, PricingUnitPayload, PricingUnitResponse, PricingUnitsPayload},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::info;
use validator::Validate;

#[derive(Clone)]
pub struct PricingUnitService {
    repository: DynPricingUnitRepository,
}

impl PricingUnitService {
    pub fn new(repository: DynPricingUnitRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl PricingUnitServiceTrait for PricingUnitService {
    async fn get_units(&self) -> Result<ApiResponse<PricingUnitsPayload>, ServiceError> {
        info!("🔍 Listing pricing units");

        let rows = self.repository.find_all().await?;
        let units = rows.into_iter().map(PricingUnitResponse::from).collect();

        Ok(ApiResponse::ok(PricingUnitsPayload { units }))
    }

    async fn create_unit(
        &self,
        req: &CreatePricingUnitRequest,
    ) -> Result<ApiResponse<PricingUnitPayload>, ServiceError> {
        info!("📝 Creating pricing unit: {}", req.unit_name);

        req.validate().map_err(ServiceError::from_validation)?;

        if self
            .repository
            .find_by_name(req.unit_name.clone())
            .await?
            .is_some()
        {
            return Err(ServiceError::Repo(RepositoryError::AlreadyExists(
                "A pricing unit with this name already exists".into(),
            )));
        }

        let unit = self.repository.create(req).await?;

        Ok(ApiResponse::with_message(
            "Pricing unit added successfully",
            PricingUnitPayload { unit: unit.into() },
        ))
    }
}
