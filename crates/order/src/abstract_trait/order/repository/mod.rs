mod command;
mod query;

pub use self::command::{DynOrderCommandRepository, OrderCommandRepositoryTrait, OrderMutator};
pub use self::query::{DynOrderQueryRepository, OrderQueryRepositoryTrait};
