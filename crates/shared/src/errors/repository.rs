use serde_json::Error as SerdeJsonError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Insufficient stock for product {product_id}: requested={requested}, available={available}")]
    InsufficientStock {
        product_id: String,
        requested: i32,
        available: i32,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] SerdeJsonError),

    #[error("Custom: {0}")]
    Custom(String),
}
