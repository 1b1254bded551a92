//! Flashcards domain - extraction of cards from completion text, generation
//! for a document, and the persisted card model.

pub mod extraction;
pub mod generation;
pub mod models;

pub use extraction::{extract_flashcards, ExtractedFlashcard};
pub use generation::{
    generate_for_document, DEFAULT_CARD_COUNT, DEFAULT_MODEL, MAX_CARD_COUNT,
};
pub use models::{Difficulty, Flashcard, FlashcardStatus, NewFlashcard};
