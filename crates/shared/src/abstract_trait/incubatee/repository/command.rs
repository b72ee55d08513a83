use crate::{
    domain::requests::{CreateIncubateeRequest, UpdateIncubateeRequest},
    errors::RepositoryError,
    model::Incubatee,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynIncubateeCommandRepository = Arc<dyn IncubateeCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait IncubateeCommandRepositoryTrait {
    async fn create(
        &self,
        req: &CreateIncubateeRequest,
        logo_path: Option<String>,
    ) -> Result<Incubatee, RepositoryError>;

    /// Partial update; `None` fields keep their stored value.
    async fn update(
        &self,
        id: i32,
        req: &UpdateIncubateeRequest,
        logo_path: Option<String>,
    ) -> Result<Incubatee, RepositoryError>;
    async fn toggle_approval(&self, id: i32) -> Result<Incubatee, RepositoryError>;
}
