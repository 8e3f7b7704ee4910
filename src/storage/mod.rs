//! Key-value store backends.
//!
//! The application never touches a filesystem or global state directly;
//! it receives a [`KeyValueStore`] and goes through
//! [`PersistenceAdapter`](crate::PersistenceAdapter).

mod error;
mod file;
mod memory;
mod store;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::KeyValueStore;
