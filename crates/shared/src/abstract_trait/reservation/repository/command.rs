use crate::{
    domain::requests::CreateReservationRequest, errors::RepositoryError, model::Reservation,
};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::sync::Arc;

pub type DynReservationCommandRepository =
    Arc<dyn ReservationCommandRepositoryTrait + Send + Sync>;

/// Lifecycle writes. Every transition is guarded by a status predicate in
/// SQL so concurrent sweeps and user actions act on disjoint rows; stock
/// claims and releases happen in the same transaction as the status write.
#[async_trait]
pub trait ReservationCommandRepositoryTrait {
    /// Claims stock and inserts a pending row; fails with a conflict when
    /// the product no longer has the requested quantity.
    async fn create(
        &self,
        user_id: i32,
        req: &CreateReservationRequest,
        price_per_stocks: f64,
    ) -> Result<Reservation, RepositoryError>;

    /// pending -> approved.
    async fn approve(&self, id: i32) -> Result<Reservation, RepositoryError>;

    /// pending|approved -> rejected; releases the claimed stock.
    async fn reject(&self, id: i32, reason: String) -> Result<Reservation, RepositoryError>;

    /// approved -> completed; stamps `completed_at`.
    async fn complete(&self, id: i32) -> Result<Reservation, RepositoryError>;

    /// Promotes every pending row; returns how many changed.
    async fn approve_all_pending(&self) -> Result<u64, RepositoryError>;

    /// Rejects every approved row reserved before the cutoff, releasing
    /// stock per row; returns how many changed.
    async fn reject_approved_before(
        &self,
        cutoff: NaiveDateTime,
        reason: String,
    ) -> Result<u64, RepositoryError>;
}
