use crate::{
    domain::{
        requests::{LoginRequest, RegisterRequest},
        responses::UserResponse,
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

#[async_trait]
pub trait AuthServiceTrait {
    async fn register(&self, req: &RegisterRequest) -> Result<UserResponse, ServiceError>;

    /// Verifies credentials and returns the access token alongside the
    /// signed-in user; cookie and session wiring stay in the handler.
    async fn login(&self, req: &LoginRequest) -> Result<(String, UserResponse), ServiceError>;
}
