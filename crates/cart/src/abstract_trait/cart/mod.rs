mod repository;
mod service;

pub use self::repository::{
    BlobStoreTrait, CartRepositoryTrait, DynBlobStore, DynCartRepository,
};
pub use self::service::{CartServiceTrait, DynCartService};
