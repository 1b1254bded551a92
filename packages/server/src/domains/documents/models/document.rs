use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{CourseId, DocumentId};

/// A user-owned PDF study document.
///
/// The file itself lives with the upload service; only its URL is kept.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    pub file_url: String,
    pub file_type: String,
    /// Extracted text; empty until a text extraction pass fills it
    pub content: String,
    pub user_id: String,
    pub course_id: Option<CourseId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated fields for a new document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDocument {
    pub title: String,
    pub file_url: String,
    pub file_type: String,
    pub course_id: Option<CourseId>,
}

// =============================================================================
// Document Queries
// =============================================================================

impl Document {
    pub async fn create(user_id: &str, input: &NewDocument, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO documents (id, title, file_url, file_type, content, user_id, course_id)
            VALUES ($1, $2, $3, $4, '', $5, $6)
            RETURNING *
            "#,
        )
        .bind(DocumentId::new())
        .bind(&input.title)
        .bind(&input.file_url)
        .bind(&input.file_type)
        .bind(user_id)
        .bind(input.course_id)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Find a document only if `user_id` owns it.
    pub async fn find_owned(id: DocumentId, user_id: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM documents WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_for_user(user_id: &str, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM documents WHERE user_id = $1 ORDER BY created_at DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Delete an owned document (flashcards cascade). Returns whether a row went away.
    pub async fn delete_owned(id: DocumentId, user_id: &str, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM documents WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
