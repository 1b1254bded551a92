//! In-memory implementation of [`BaseStudyStore`] for tests and local runs.
//!
//! Not suitable for production: data is lost on restart. Rows are kept in
//! insertion order so "newest first" is a reverse scan.

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::RwLock;

use super::BaseStudyStore;
use crate::common::{DocumentId, FlashcardId};
use crate::domains::documents::{Document, NewDocument};
use crate::domains::flashcards::{Flashcard, FlashcardStatus, NewFlashcard};

#[derive(Default)]
pub struct MemoryStore {
    documents: RwLock<Vec<Document>>,
    flashcards: RwLock<Vec<Flashcard>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document_count(&self) -> usize {
        self.documents.read().unwrap().len()
    }

    pub fn flashcard_count(&self) -> usize {
        self.flashcards.read().unwrap().len()
    }
}

#[async_trait]
impl BaseStudyStore for MemoryStore {
    async fn create_document(&self, owner_id: &str, input: &NewDocument) -> Result<Document> {
        let now = Utc::now();
        let document = Document {
            id: DocumentId::new(),
            title: input.title.clone(),
            file_url: input.file_url.clone(),
            file_type: input.file_type.clone(),
            content: String::new(),
            user_id: owner_id.to_string(),
            course_id: input.course_id,
            created_at: now,
            updated_at: now,
        };
        self.documents.write().unwrap().push(document.clone());
        Ok(document)
    }

    async fn find_document(&self, id: DocumentId, owner_id: &str) -> Result<Option<Document>> {
        Ok(self
            .documents
            .read()
            .unwrap()
            .iter()
            .find(|d| d.id == id && d.user_id == owner_id)
            .cloned())
    }

    async fn list_documents(&self, owner_id: &str) -> Result<Vec<Document>> {
        Ok(self
            .documents
            .read()
            .unwrap()
            .iter()
            .rev()
            .filter(|d| d.user_id == owner_id)
            .cloned()
            .collect())
    }

    async fn delete_document(&self, id: DocumentId, owner_id: &str) -> Result<bool> {
        let mut documents = self.documents.write().unwrap();
        let before = documents.len();
        documents.retain(|d| !(d.id == id && d.user_id == owner_id));
        let deleted = documents.len() < before;
        drop(documents);

        if deleted {
            self.flashcards
                .write()
                .unwrap()
                .retain(|f| f.document_id != id);
        }
        Ok(deleted)
    }

    async fn create_flashcards(
        &self,
        document_id: DocumentId,
        cards: &[NewFlashcard],
    ) -> Result<Vec<Flashcard>> {
        // Same foreign key the schema enforces. The guard is held until the
        // cards are in so a concurrent delete cascades over them.
        let documents = self.documents.read().unwrap();
        if !documents.iter().any(|d| d.id == document_id) {
            bail!("document {} does not exist", document_id);
        }

        let now = Utc::now();
        let saved: Vec<Flashcard> = cards
            .iter()
            .map(|card| Flashcard {
                id: FlashcardId::new(),
                front: card.front.clone(),
                back: card.back.clone(),
                difficulty: card.difficulty,
                source_text: card.source_text.clone(),
                status: FlashcardStatus::New,
                document_id,
                created_at: now,
            })
            .collect();

        self.flashcards.write().unwrap().extend(saved.iter().cloned());
        drop(documents);
        Ok(saved)
    }

    async fn list_flashcards(&self, document_id: DocumentId) -> Result<Vec<Flashcard>> {
        Ok(self
            .flashcards
            .read()
            .unwrap()
            .iter()
            .rev()
            .filter(|f| f.document_id == document_id)
            .cloned()
            .collect())
    }

    async fn delete_flashcards(&self, document_id: DocumentId) -> Result<u64> {
        let mut flashcards = self.flashcards.write().unwrap();
        let before = flashcards.len();
        flashcards.retain(|f| f.document_id != document_id);
        Ok((before - flashcards.len()) as u64)
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::flashcards::Difficulty;

    fn syllabus() -> NewDocument {
        NewDocument {
            title: "Syllabus".into(),
            file_url: "https://files.example.com/syllabus.pdf".into(),
            file_type: "application/pdf".into(),
            course_id: None,
        }
    }

    fn card(front: &str) -> NewFlashcard {
        NewFlashcard {
            front: front.into(),
            back: "answer".into(),
            difficulty: Difficulty::Easy,
            source_text: String::new(),
        }
    }

    #[tokio::test]
    async fn documents_are_scoped_to_owner() {
        let store = MemoryStore::new();
        let doc = store.create_document("alice", &syllabus()).await.unwrap();

        assert!(store.find_document(doc.id, "alice").await.unwrap().is_some());
        assert!(store.find_document(doc.id, "bob").await.unwrap().is_none());
        assert!(store.list_documents("bob").await.unwrap().is_empty());
        assert!(!store.delete_document(doc.id, "bob").await.unwrap());
        assert_eq!(store.document_count(), 1);
    }

    #[tokio::test]
    async fn listing_is_newest_first() {
        let store = MemoryStore::new();
        let first = store.create_document("alice", &syllabus()).await.unwrap();
        let second = store.create_document("alice", &syllabus()).await.unwrap();

        let ids: Vec<DocumentId> = store
            .list_documents("alice")
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[tokio::test]
    async fn deleting_document_cascades_to_flashcards() {
        let store = MemoryStore::new();
        let doc = store.create_document("alice", &syllabus()).await.unwrap();
        store
            .create_flashcards(doc.id, &[card("Q1"), card("Q2")])
            .await
            .unwrap();

        assert!(store.delete_document(doc.id, "alice").await.unwrap());
        assert_eq!(store.flashcard_count(), 0);
    }

    #[tokio::test]
    async fn flashcards_require_existing_document() {
        let store = MemoryStore::new();
        let result = store.create_flashcards(DocumentId::new(), &[card("Q")]).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn new_flashcards_start_as_new() {
        let store = MemoryStore::new();
        let doc = store.create_document("alice", &syllabus()).await.unwrap();
        let saved = store.create_flashcards(doc.id, &[card("Q")]).await.unwrap();

        assert_eq!(saved[0].status, FlashcardStatus::New);
        assert_eq!(saved[0].document_id, doc.id);
        assert_eq!(store.delete_flashcards(doc.id).await.unwrap(), 1);
        assert_eq!(store.delete_flashcards(doc.id).await.unwrap(), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_delete_never_leaves_orphaned_flashcards() {
        for _ in 0..200 {
            let store = std::sync::Arc::new(MemoryStore::new());
            let doc = store.create_document("alice", &syllabus()).await.unwrap();
            let id = doc.id;

            let creator = {
                let store = store.clone();
                tokio::spawn(async move { store.create_flashcards(id, &[card("Q")]).await })
            };
            let deleter = {
                let store = store.clone();
                tokio::spawn(async move { store.delete_document(id, "alice").await })
            };

            // Either order is fine; the create may lose the race and fail
            let _ = creator.await.unwrap();
            assert!(deleter.await.unwrap().unwrap());
            assert_eq!(store.document_count(), 0);
            assert_eq!(store.flashcard_count(), 0);
        }
    }
}
