use crate::{
    errors::RepositoryError,
    model::{Incubatee, IncubateeWithStats},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynIncubateeQueryRepository = Arc<dyn IncubateeQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait IncubateeQueryRepositoryTrait {
    /// All incubatees ordered by company name.
    async fn find_all(&self) -> Result<Vec<Incubatee>, RepositoryError>;

    /// Full rows with product counts and completed-sales totals.
    async fn find_with_stats(&self) -> Result<Vec<IncubateeWithStats>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Incubatee>, RepositoryError>;
    async fn find_by_email(&self, email: String) -> Result<Option<Incubatee>, RepositoryError>;
}
