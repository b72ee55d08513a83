mod command;
mod query;

pub use self::command::{DynReservationCommandRepository, ReservationCommandRepositoryTrait};
pub use self::query::{DynReservationQueryRepository, ReservationQueryRepositoryTrait};
