use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateIncubateeRequest {
    #[validate(length(min = 2, message = "First name must be at least 2 characters"))]
    pub first_name: String,

    pub middle_name: Option<String>,

    #[validate(length(min = 2, message = "Last name must be at least 2 characters"))]
    pub last_name: String,

    #[validate(length(min = 2, message = "Company name must be at least 2 characters"))]
    pub company_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 7, message = "Phone must be at least 7 characters"))]
    pub phone: String,

    #[validate(length(min = 1, message = "Batch is required"))]
    pub batch: String,
}

/// Partial update; only supplied fields are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateIncubateeRequest {
    #[validate(length(min = 2, message = "First name must be at least 2 characters"))]
    pub first_name: Option<String>,

    pub middle_name: Option<String>,

    #[validate(length(min = 2, message = "Last name must be at least 2 characters"))]
    pub last_name: Option<String>,

    #[validate(length(min = 2, message = "Company name must be at least 2 characters"))]
    pub company_name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 7, message = "Phone must be at least 7 characters"))]
    pub phone: Option<String>,

    #[validate(length(min = 1, message = "Batch is required"))]
    pub batch: Option<String>,
}
