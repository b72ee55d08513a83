use crate::model::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
}

// model to response; the password hash never leaves the service layer
impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        UserResponse {
            id: value.user_id,
            username: value.username,
            email: value.email,
            phone: value.phone,
            role: value.role,
            created_at: value.created_at.map(|dt| dt.to_string()),
        }
    }
}

/// Per-status reservation counts backing the dashboard notification poll.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Clone)]
pub struct UserStatsResponse {
    pub pending: i64,
    pub approved: i64,
    pub completed: i64,
    pub rejected: i64,
    pub total: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct UserPayload {
    pub user: UserResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct StatsPayload {
    pub stats: UserStatsResponse,
}
