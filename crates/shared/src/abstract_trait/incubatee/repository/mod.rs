mod command;
mod query;

pub use self::command::{DynIncubateeCommandRepository, IncubateeCommandRepositoryTrait};
pub use self::query::{DynIncubateeQueryRepository, IncubateeQueryRepositoryTrait};
