use crate::{
    errors::RepositoryError,
    model::{Reservation, ReservationDetail, SalesLine},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

pub type DynReservationQueryRepository = Arc<dyn ReservationQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ReservationQueryRepositoryTrait {
    /// Every reservation joined with product name and username, newest
    /// first.
    async fn find_all(&self) -> Result<Vec<ReservationDetail>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Reservation>, RepositoryError>;
    async fn find_detail_by_id(
        &self,
        id: i32,
    ) -> Result<Option<ReservationDetail>, RepositoryError>;
    async fn find_by_user(&self, user_id: i32)
    -> Result<Vec<ReservationDetail>, RepositoryError>;

    /// Completed reservations whose `completed_at` falls on the given day.
    async fn find_completed_on(&self, date: NaiveDate)
    -> Result<Vec<SalesLine>, RepositoryError>;
}
