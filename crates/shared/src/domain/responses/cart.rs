use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Distinct-item count for the cart badge; also returned by the add
/// endpoint so the badge can update without a second request.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CartCountPayload {
    pub count: i64,
}
