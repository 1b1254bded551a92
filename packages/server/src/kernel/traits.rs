// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Prompt wording, fallback cards and ownership rules live in the domains.
//
// Naming convention: Base* for trait names (e.g., BaseCompletionService)

use anyhow::Result;
use async_trait::async_trait;

use crate::common::DocumentId;
use crate::domains::documents::{Document, NewDocument};
use crate::domains::flashcards::{Flashcard, NewFlashcard};

// =============================================================================
// Completion Service Trait (Infrastructure - hosted LLM)
// =============================================================================

/// A single system + user prompt pair with sampling settings.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionPrompt {
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[async_trait]
pub trait BaseCompletionService: Send + Sync {
    /// Complete a prompt (returns raw text response)
    async fn complete(&self, prompt: &CompletionPrompt) -> Result<String>;
}

// =============================================================================
// Study Store Trait (Infrastructure - persistence)
// =============================================================================

/// Persistence for documents and their flashcards.
///
/// Every document lookup is scoped by owner: a document owned by someone else
/// is indistinguishable from one that does not exist.
#[async_trait]
pub trait BaseStudyStore: Send + Sync {
    async fn create_document(&self, owner_id: &str, input: &NewDocument) -> Result<Document>;

    async fn find_document(&self, id: DocumentId, owner_id: &str) -> Result<Option<Document>>;

    /// Newest first.
    async fn list_documents(&self, owner_id: &str) -> Result<Vec<Document>>;

    /// Deletes the document and its flashcards. Returns false if nothing matched.
    async fn delete_document(&self, id: DocumentId, owner_id: &str) -> Result<bool>;

    /// Insert all cards for a document atomically, assigning ids, timestamps and `new` status.
    async fn create_flashcards(
        &self,
        document_id: DocumentId,
        cards: &[NewFlashcard],
    ) -> Result<Vec<Flashcard>>;

    /// Newest first.
    async fn list_flashcards(&self, document_id: DocumentId) -> Result<Vec<Flashcard>>;

    /// Returns the number of cards removed.
    async fn delete_flashcards(&self, document_id: DocumentId) -> Result<u64>;

    /// Cheap liveness probe for health checks.
    async fn ping(&self) -> Result<()>;
}
