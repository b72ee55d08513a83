use crate::{errors::RepositoryError, model::User};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserQueryRepository = Arc<dyn UserQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserQueryRepositoryTrait {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError>;
    async fn find_by_username(&self, username: String) -> Result<Option<User>, RepositoryError>;
    async fn find_by_email(&self, email: String) -> Result<Option<User>, RepositoryError>;

    /// Reservation counts keyed by status for one user.
    async fn count_reservations_by_status(
        &self,
        user_id: i32,
    ) -> Result<Vec<(String, i64)>, RepositoryError>;
}
