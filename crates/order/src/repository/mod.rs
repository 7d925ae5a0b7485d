mod command;
mod query;
mod store;

pub use self::command::OrderCommandRepository;
pub use self::query::OrderQueryRepository;
pub use self::store::OrderStore;
