// Domain modules

pub mod auth;
pub mod documents;
pub mod flashcards;
