use crate::{
    abstract_trait::{
        DynHashing, DynUserCommandRepository, DynUserQueryRepository, UserServiceTrait,
    },
    domain::{
        requests::{ChangePasswordRequest, UpdateProfileRequest},
        responses::{ApiResponse, MessageResponse, StatsPayload, UserPayload, UserStatsResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{STATUS_APPROVED, STATUS_COMPLETED, STATUS_PENDING, STATUS_REJECTED},
};
use async_trait::async_trait;
use tracing::info;
use validator::Validate;

#[derive(Clone)]
pub struct UserService {
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
    hashing: DynHashing,
}

impl UserService {
    pub fn new(
        query: DynUserQueryRepository,
        command: DynUserCommandRepository,
        hashing: DynHashing,
    ) -> Self {
        Self {
            query,
            command,
            hashing,
        }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn get_user(&self, user_id: i32) -> Result<ApiResponse<UserPayload>, ServiceError> {
        info!("🆔 Fetching user: {}", user_id);

        let user = self
            .query
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        Ok(ApiResponse::ok(UserPayload { user: user.into() }))
    }

    async fn update_profile(
        &self,
        user_id: i32,
        req: &UpdateProfileRequest,
    ) -> Result<ApiResponse<UserPayload>, ServiceError> {
        info!("✏️ Updating profile for user: {}", user_id);

        req.validate().map_err(ServiceError::from_validation)?;

        if let Some(existing) = self.query.find_by_username(req.username.clone()).await?
            && existing.user_id != user_id
        {
            return Err(ServiceError::Repo(RepositoryError::AlreadyExists(
                "Username already taken".into(),
            )));
        }

        if let Some(existing) = self.query.find_by_email(req.email.clone()).await?
            && existing.user_id != user_id
        {
            return Err(ServiceError::Repo(RepositoryError::AlreadyExists(
                "Email already registered".into(),
            )));
        }

        let user = self.command.update_profile(user_id, req).await?;

        Ok(ApiResponse::with_message(
            "Profile updated successfully",
            UserPayload { user: user.into() },
        ))
    }

    async fn get_stats(&self, user_id: i32) -> Result<ApiResponse<StatsPayload>, ServiceError> {
        info!("📊 Fetching reservation stats for user: {}", user_id);

        let rows = self.query.count_reservations_by_status(user_id).await?;

        let mut stats = UserStatsResponse::default();
        for (status, count) in rows {
            match status.as_str() {
                STATUS_PENDING => stats.pending = count,
                STATUS_APPROVED => stats.approved = count,
                STATUS_COMPLETED => stats.completed = count,
                STATUS_REJECTED => stats.rejected = count,
                _ => {}
            }
            stats.total += count;
        }

        Ok(ApiResponse::ok(StatsPayload { stats }))
    }

    async fn change_password(
        &self,
        user_id: i32,
        req: &ChangePasswordRequest,
    ) -> Result<MessageResponse, ServiceError> {
        info!("🔑 Changing password for user: {}", user_id);

        req.validate().map_err(ServiceError::from_validation)?;

        let user = self
            .query
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        self.hashing
            .compare_password(&user.password, &req.current_password)
            .await
            .map_err(|_| ServiceError::Forbidden("Current password is incorrect".into()))?;

        let hashed = self.hashing.hash_password(&req.new_password).await?;
        self.command.update_password(user_id, hashed).await?;

        Ok(MessageResponse::new("Password changed successfully"))
    }
}
