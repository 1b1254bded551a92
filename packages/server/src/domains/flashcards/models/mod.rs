pub mod flashcard;

pub use flashcard::{Difficulty, Flashcard, FlashcardStatus, NewFlashcard};
