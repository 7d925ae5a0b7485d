pub mod abstract_trait;
pub mod domain;
pub mod repository;
pub mod service;
