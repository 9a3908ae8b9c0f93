mod entity_persistence;
mod entity_store;
mod json_file_persistence;
mod memory_persistence;
mod persistence_error;
mod store_error;

pub use entity_persistence::EntityPersistence;
pub use entity_store::EntityStore;
pub use json_file_persistence::JsonFilePersistence;
pub use memory_persistence::MemoryPersistence;
pub use persistence_error::PersistenceError;
pub use store_error::StoreError;
