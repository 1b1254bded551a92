//! Document endpoints: register, list, view and delete owned documents.

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::common::{AuthenticatedUser, DocumentId, Viewer};
use crate::domains::documents::{CreateDocumentInput, Document};
use crate::kernel::ServerDeps;
use crate::server::error::ApiError;

/// Resolve a document by raw id, visible only to its owner.
///
/// Malformed ids, missing documents and other users' documents all come
/// back as the same 404.
pub async fn find_owned_document(
    deps: &ServerDeps,
    raw_id: &str,
    user: &AuthenticatedUser,
) -> Result<Document, ApiError> {
    let id = DocumentId::parse(raw_id.trim()).map_err(|_| ApiError::NotFound("Document"))?;

    deps.store
        .find_document(id, &user.id)
        .await?
        .ok_or(ApiError::NotFound("Document"))
}

/// POST /documents
pub async fn create_document(
    Extension(deps): Extension<ServerDeps>,
    viewer: Viewer,
    body: Result<Json<CreateDocumentInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Document>), ApiError> {
    let user = viewer.require_auth()?;
    let Json(input) = body?;
    let new_document = input.validate().map_err(ApiError::Validation)?;

    let document = deps.store.create_document(&user.id, &new_document).await?;

    info!(document_id = %document.id, user_id = %user.id, "Document created");
    Ok((StatusCode::CREATED, Json(document)))
}

/// GET /documents
pub async fn list_documents(
    Extension(deps): Extension<ServerDeps>,
    viewer: Viewer,
) -> Result<Json<Vec<Document>>, ApiError> {
    let user = viewer.require_auth()?;
    Ok(Json(deps.store.list_documents(&user.id).await?))
}

/// GET /documents/:document_id
pub async fn get_document(
    Extension(deps): Extension<ServerDeps>,
    viewer: Viewer,
    Path(document_id): Path<String>,
) -> Result<Json<Document>, ApiError> {
    let user = viewer.require_auth()?;
    Ok(Json(find_owned_document(&deps, &document_id, user).await?))
}

/// DELETE /documents/:document_id
pub async fn delete_document(
    Extension(deps): Extension<ServerDeps>,
    viewer: Viewer,
    Path(document_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let user = viewer.require_auth()?;
    let document = find_owned_document(&deps, &document_id, user).await?;

    // A concurrent delete may have won the race; same answer either way
    if !deps.store.delete_document(document.id, &user.id).await? {
        return Err(ApiError::NotFound("Document"));
    }

    info!(document_id = %document.id, user_id = %user.id, "Document deleted");
    Ok(StatusCode::NO_CONTENT)
}
