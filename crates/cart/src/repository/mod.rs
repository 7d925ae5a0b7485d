mod blob_store;
mod cart;

pub use self::blob_store::InMemoryBlobStore;
pub use self::cart::CartRepository;
