pub mod catalog_client;
pub mod console;
pub mod di;
pub mod domain;
pub mod seed;
pub mod state;
