mod command;
mod query;

use self::command::ReservationCommandRepository;
use self::query::ReservationQueryRepository;

use crate::{
    abstract_trait::{DynReservationCommandRepository, DynReservationQueryRepository},
    config::ConnectionPool,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct ReservationRepository {
    pub query: DynReservationQueryRepository,
    pub command: DynReservationCommandRepository,
}

impl ReservationRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query = Arc::new(ReservationQueryRepository::new(pool.clone()))
            as DynReservationQueryRepository;
        let command = Arc::new(ReservationCommandRepository::new(pool.clone()))
            as DynReservationCommandRepository;

        Self { query, command }
    }
}
