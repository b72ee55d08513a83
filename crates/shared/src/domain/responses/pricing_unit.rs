use crate::model::PricingUnit;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct PricingUnitResponse {
    pub id: i32,
    pub unit_name: String,
    pub unit_description: Option<String>,
}

// model to response
impl From<PricingUnit> for PricingUnitResponse {
    fn from(value: PricingUnit) -> Self {
        PricingUnitResponse {
            id: value.unit_id,
            unit_name: value.unit_name,
            unit_description: value.unit_description,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct PricingUnitsPayload {
    pub units: Vec<PricingUnitResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct PricingUnitPayload {
    pub unit: PricingUnitResponse,
}
