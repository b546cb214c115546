pub mod models;
pub mod repo;

mod memory;
pub use memory::MemoryStore;

pub use models::{Todo, MAX_TEXT_LEN};
pub use repo::{StoreError, TodoStore};
