use crate::{
    domain::{
        requests::{ChangePasswordRequest, UpdateProfileRequest},
        responses::{ApiResponse, MessageResponse, StatsPayload, UserPayload},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserService = Arc<dyn UserServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserServiceTrait {
    async fn get_user(&self, user_id: i32) -> Result<ApiResponse<UserPayload>, ServiceError>;
    async fn update_profile(
        &self,
        user_id: i32,
        req: &UpdateProfileRequest,
    ) -> Result<ApiResponse<UserPayload>, ServiceError>;
    async fn get_stats(&self, user_id: i32) -> Result<ApiResponse<StatsPayload>, ServiceError>;
    async fn change_password(
        &self,
        user_id: i32,
        req: &ChangePasswordRequest,
    ) -> Result<MessageResponse, ServiceError>;
}
