//! Flashcard endpoints, all scoped to a document the caller owns.

use axum::{
    extract::{rejection::JsonRejection, Extension, Query},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::documents::find_owned_document;
use crate::common::Viewer;
use crate::domains::flashcards::{
    generate_for_document, Flashcard, DEFAULT_CARD_COUNT, MAX_CARD_COUNT,
};
use crate::kernel::ServerDeps;
use crate::server::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentQuery {
    pub document_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateFlashcardsInput {
    pub document_id: Option<String>,
    pub count: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteFlashcardsResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateFlashcardsResponse {
    pub success: bool,
    pub flashcards: Vec<Flashcard>,
}

fn require_document_id(document_id: Option<String>) -> Result<String, ApiError> {
    document_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("Document ID is required".to_string()))
}

/// GET /flashcards?documentId=
pub async fn list_flashcards(
    Extension(deps): Extension<ServerDeps>,
    viewer: Viewer,
    Query(query): Query<DocumentQuery>,
) -> Result<Json<Vec<Flashcard>>, ApiError> {
    let user = viewer.require_auth()?;
    let document_id = require_document_id(query.document_id)?;
    let document = find_owned_document(&deps, &document_id, user).await?;

    Ok(Json(deps.store.list_flashcards(document.id).await?))
}

/// DELETE /flashcards?documentId=
///
/// Idempotent: a document with no cards still answers with success.
pub async fn delete_flashcards(
    Extension(deps): Extension<ServerDeps>,
    viewer: Viewer,
    Query(query): Query<DocumentQuery>,
) -> Result<Json<DeleteFlashcardsResponse>, ApiError> {
    let user = viewer.require_auth()?;
    let document_id = require_document_id(query.document_id)?;
    let document = find_owned_document(&deps, &document_id, user).await?;

    let deleted = deps.store.delete_flashcards(document.id).await?;
    info!(document_id = %document.id, deleted, "Flashcards deleted");

    Ok(Json(DeleteFlashcardsResponse {
        success: true,
        message: "All flashcards deleted successfully".to_string(),
    }))
}

/// POST /flashcards/generate
pub async fn generate_flashcards(
    Extension(deps): Extension<ServerDeps>,
    viewer: Viewer,
    body: Result<Json<GenerateFlashcardsInput>, JsonRejection>,
) -> Result<Json<GenerateFlashcardsResponse>, ApiError> {
    let user = viewer.require_auth()?;
    let Json(input) = body?;
    let document_id = require_document_id(input.document_id)?;

    let count = input.count.unwrap_or(DEFAULT_CARD_COUNT);
    if !(1..=MAX_CARD_COUNT).contains(&count) {
        return Err(ApiError::Validation(format!(
            "Count must be between 1 and {}",
            MAX_CARD_COUNT
        )));
    }

    let document = find_owned_document(&deps, &document_id, user).await?;
    let flashcards = generate_for_document(&deps, &document, count).await?;

    Ok(Json(GenerateFlashcardsResponse {
        success: true,
        flashcards,
    }))
}
