mod repository;
mod service;

pub use self::repository::{
    DynReservationCommandRepository, DynReservationQueryRepository,
    ReservationCommandRepositoryTrait, ReservationQueryRepositoryTrait,
};
pub use self::service::{DynReservationService, ReservationServiceTrait};
