//! PostgreSQL implementation of [`BaseStudyStore`].
//!
//! Thin adapter over the model query functions; referential integrity and
//! cascade on document delete are enforced by the schema in `migrations/`.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use super::BaseStudyStore;
use crate::common::DocumentId;
use crate::domains::documents::{Document, NewDocument};
use crate::domains::flashcards::{Flashcard, NewFlashcard};

#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseStudyStore for PostgresStore {
    async fn create_document(&self, owner_id: &str, input: &NewDocument) -> Result<Document> {
        Document::create(owner_id, input, &self.pool).await
    }

    async fn find_document(&self, id: DocumentId, owner_id: &str) -> Result<Option<Document>> {
        Document::find_owned(id, owner_id, &self.pool).await
    }

    async fn list_documents(&self, owner_id: &str) -> Result<Vec<Document>> {
        Document::find_for_user(owner_id, &self.pool).await
    }

    async fn delete_document(&self, id: DocumentId, owner_id: &str) -> Result<bool> {
        Document::delete_owned(id, owner_id, &self.pool).await
    }

    async fn create_flashcards(
        &self,
        document_id: DocumentId,
        cards: &[NewFlashcard],
    ) -> Result<Vec<Flashcard>> {
        Flashcard::create_batch(document_id, cards, &self.pool).await
    }

    async fn list_flashcards(&self, document_id: DocumentId) -> Result<Vec<Flashcard>> {
        Flashcard::find_for_document(document_id, &self.pool).await
    }

    async fn delete_flashcards(&self, document_id: DocumentId) -> Result<u64> {
        Flashcard::delete_for_document(document_id, &self.pool).await
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
