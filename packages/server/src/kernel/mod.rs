//! Kernel module - server infrastructure and dependencies.

pub mod ai;
pub mod deps;
pub mod memory_store;
pub mod postgres_store;
pub mod test_dependencies;
pub mod traits;

pub use ai::OpenAICompletionService;
pub use deps::ServerDeps;
pub use memory_store::MemoryStore;
pub use postgres_store::PostgresStore;
pub use test_dependencies::{MockCompletion, MockCompletionService, TestDependencies};
pub use traits::*;
