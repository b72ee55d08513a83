use crate::model::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Session record stored in Redis under `session:{user_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: i32,
    pub username: String,
    pub role: String,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

impl From<&User> for Session {
    fn from(value: &User) -> Self {
        Session {
            user_id: value.user_id,
            username: value.username.clone(),
            role: value.role.clone(),
        }
    }
}

/// Minimal identity carried by the session probe.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct SessionUserResponse {
    pub id: i32,
    pub username: String,
    pub role: String,
}

impl From<Session> for SessionUserResponse {
    fn from(value: Session) -> Self {
        SessionUserResponse {
            id: value.user_id,
            username: value.username,
            role: value.role,
        }
    }
}

/// `/auth/check` payload: always delivered with HTTP 200 so pollers can
/// branch on the flag instead of handling 401s.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct AuthCheckPayload {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUserResponse>,
}
