pub mod catalog_client;
pub mod order;
pub mod scoping;
