use crate::{
    domain::{
        requests::CreatePricingUnitRequest,
        responses::{ApiResponse, PricingUnitPayload, PricingUnitsPayload},
    },
    errors::{RepositoryError, ServiceError},
    model::PricingUnit,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynPricingUnitRepository = Arc<dyn PricingUnitRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait PricingUnitRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<PricingUnit>, RepositoryError>;
    async fn find_by_name(&self, name: String) -> Result<Option<PricingUnit>, RepositoryError>;
    async fn create(&self, req: &CreatePricingUnitRequest)
    -> Result<PricingUnit, RepositoryError>;
}

pub type DynPricingUnitService = Arc<dyn PricingUnitServiceTrait + Send + Sync>;

#[async_trait]
pub trait PricingUnitServiceTrait {
    async fn get_units(&self) -> Result<ApiResponse<PricingUnitsPayload>, ServiceError>;
    async fn create_unit(
        &self,
        req: &CreatePricingUnitRequest,
    ) -> Result<ApiResponse<PricingUnitPayload>, ServiceError>;
}
