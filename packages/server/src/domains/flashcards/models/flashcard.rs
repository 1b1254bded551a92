use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{DocumentId, FlashcardId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "flashcard_difficulty", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Case-insensitive; anything unrecognized (including empty) is `Medium`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "flashcard_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FlashcardStatus {
    #[default]
    New,
    Learning,
    Review,
    Mastered,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub id: FlashcardId,
    pub front: String,
    pub back: String,
    pub difficulty: Difficulty,
    pub source_text: String,
    pub status: FlashcardStatus,
    pub document_id: DocumentId,
    pub created_at: DateTime<Utc>,
}

/// A card ready to be persisted against a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFlashcard {
    pub front: String,
    pub back: String,
    pub difficulty: Difficulty,
    pub source_text: String,
}

// =============================================================================
// Flashcard Queries
// =============================================================================

impl Flashcard {
    /// Insert a batch for one document in a single transaction.
    pub async fn create_batch(
        document_id: DocumentId,
        cards: &[NewFlashcard],
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        let mut tx = pool.begin().await?;
        let mut saved = Vec::with_capacity(cards.len());

        for card in cards {
            let row = sqlx::query_as::<_, Self>(
                r#"
                INSERT INTO flashcards (id, front, back, difficulty, source_text, status, document_id)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING *
                "#,
            )
            .bind(FlashcardId::new())
            .bind(&card.front)
            .bind(&card.back)
            .bind(card.difficulty)
            .bind(&card.source_text)
            .bind(FlashcardStatus::New)
            .bind(document_id)
            .fetch_one(&mut *tx)
            .await?;
            saved.push(row);
        }

        tx.commit().await?;
        Ok(saved)
    }

    pub async fn find_for_document(document_id: DocumentId, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM flashcards WHERE document_id = $1 ORDER BY created_at DESC, id DESC",
        )
        .bind(document_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Returns the number of cards removed.
    pub async fn delete_for_document(document_id: DocumentId, pool: &PgPool) -> Result<u64> {
        let result = sqlx::query("DELETE FROM flashcards WHERE document_id = $1")
            .bind(document_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_labels_are_case_insensitive() {
        assert_eq!(Difficulty::from_label("HARD"), Difficulty::Hard);
        assert_eq!(Difficulty::from_label(" Easy "), Difficulty::Easy);
        assert_eq!(Difficulty::from_label("medium"), Difficulty::Medium);
    }

    #[test]
    fn unknown_difficulty_falls_back_to_medium() {
        assert_eq!(Difficulty::from_label("very hard"), Difficulty::Medium);
        assert_eq!(Difficulty::from_label(""), Difficulty::Medium);
    }

    #[test]
    fn flashcard_serializes_camel_case() {
        let card = Flashcard {
            id: FlashcardId::new(),
            front: "Q".into(),
            back: "A".into(),
            difficulty: Difficulty::Hard,
            source_text: "p. 3".into(),
            status: FlashcardStatus::New,
            document_id: DocumentId::new(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&card).unwrap();

        assert_eq!(json["difficulty"], "hard");
        assert_eq!(json["status"], "new");
        assert_eq!(json["sourceText"], "p. 3");
        assert!(json.get("documentId").is_some());
    }
}
