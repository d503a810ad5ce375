//! Infrastructure layer - Storage adapters
//!
//! - `sqlite`: durable backend (default feature)
//! - `memory`: vector-backed backend for tests

pub mod memory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use memory::InMemoryGraphBackend;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteGraphBackend;
