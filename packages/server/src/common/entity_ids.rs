//! Typed ID definitions for the persisted entities.

pub use super::id::Id;

/// Marker type for uploaded study documents.
pub struct Document;

/// Marker type for flashcards generated from a document.
pub struct Flashcard;

/// Marker type for courses a document may be filed under.
pub struct Course;

pub type DocumentId = Id<Document>;

pub type FlashcardId = Id<Flashcard>;

pub type CourseId = Id<Course>;
