mod repository;
mod service;

pub use self::repository::{
    DynIncubateeCommandRepository, DynIncubateeQueryRepository, IncubateeCommandRepositoryTrait,
    IncubateeQueryRepositoryTrait,
};
pub use self::service::{DynIncubateeService, IncubateeServiceTrait};
