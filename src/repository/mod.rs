//! Repository Layer
//!
//! Config store abstraction, its backends, and typed operations on top.

mod traits;
mod memory;
mod sqlite;
mod item_tag;
mod config_repo;


pub use traits::ConfigStore;
pub use memory::MemoryConfigStore;
pub use sqlite::SqliteConfigStore;
pub use item_tag::ItemTagOperations;
pub use config_repo::ConfigOperations;
