use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePricingUnitRequest {
    #[validate(length(min = 1, message = "Unit name is required"))]
    pub unit_name: String,

    pub unit_description: Option<String>,
}
