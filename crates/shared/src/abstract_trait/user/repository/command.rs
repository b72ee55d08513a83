use crate::{
    domain::requests::{CreateUserData, UpdateProfileRequest},
    errors::RepositoryError,
    model::User,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserCommandRepository = Arc<dyn UserCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserCommandRepositoryTrait {
    async fn create_user(&self, data: &CreateUserData) -> Result<User, RepositoryError>;
    async fn update_profile(
        &self,
        user_id: i32,
        req: &UpdateProfileRequest,
    ) -> Result<User, RepositoryError>;
    async fn update_password(
        &self,
        user_id: i32,
        password_hash: String,
    ) -> Result<User, RepositoryError>;
}
