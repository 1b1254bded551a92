// Studycards - API Core
//
// Backend for registering PDF study documents and drafting flashcards from
// them with a hosted language model. Persistence and the completion service
// sit behind kernel traits so handlers can be exercised against fakes.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
