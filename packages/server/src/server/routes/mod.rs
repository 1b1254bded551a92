// HTTP routes
pub mod documents;
pub mod flashcards;
pub mod health;

pub use documents::*;
pub use flashcards::*;
pub use health::*;
