mod command;
mod query;

use self::command::IncubateeCommandRepository;
use self::query::IncubateeQueryRepository;

use crate::{
    abstract_trait::{DynIncubateeCommandRepository, DynIncubateeQueryRepository},
    config::ConnectionPool,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct IncubateeRepository {
    pub query: DynIncubateeQueryRepository,
    pub command: DynIncubateeCommandRepository,
}

impl IncubateeRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query =
            Arc::new(IncubateeQueryRepository::new(pool.clone())) as DynIncubateeQueryRepository;
        let command = Arc::new(IncubateeCommandRepository::new(pool.clone()))
            as DynIncubateeCommandRepository;

        Self { query, command }
    }
}
