//! Read-only endpoints over the seeded portfolio content.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::portfolio::{Document, Experience, Skill};
use crate::state::AppState;

const DOCUMENT_NOT_FOUND: &str = "Document not found";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPreview {
    pub title: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub description: String,
    pub preview_url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDownload {
    pub title: String,
    pub file_path: Option<String>,
    /// `/downloads` + file path; the file itself is served by the static layer.
    pub download_url: Option<String>,
}

impl From<Document> for DocumentPreview {
    fn from(doc: Document) -> Self {
        Self {
            title: doc.title,
            doc_type: doc.doc_type,
            description: doc.description,
            preview_url: doc.preview_url,
        }
    }
}

impl From<Document> for DocumentDownload {
    fn from(doc: Document) -> Self {
        let download_url = doc.file_path.as_ref().map(|p| format!("/downloads{p}"));
        Self {
            title: doc.title,
            file_path: doc.file_path,
            download_url,
        }
    }
}

/// GET /api/experiences
pub async fn handle_list_experiences(
    State(state): State<AppState>,
) -> Result<Json<Vec<Experience>>, AppError> {
    let experiences = state
        .store
        .list_experiences()
        .await
        .map_err(AppError::failed("Failed to fetch experiences"))?;
    Ok(Json(experiences))
}

/// GET /api/documents
pub async fn handle_list_documents(
    State(state): State<AppState>,
) -> Result<Json<Vec<Document>>, AppError> {
    let documents = state
        .store
        .list_documents()
        .await
        .map_err(AppError::failed("Failed to fetch documents"))?;
    Ok(Json(documents))
}

/// GET /api/skills
pub async fn handle_list_skills(
    State(state): State<AppState>,
) -> Result<Json<Vec<Skill>>, AppError> {
    let skills = state
        .store
        .list_skills()
        .await
        .map_err(AppError::failed("Failed to fetch skills"))?;
    Ok(Json(skills))
}

/// GET /api/documents/:id/preview
pub async fn handle_document_preview(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<DocumentPreview>, AppError> {
    let doc = find_document(&state, id, "Failed to fetch document preview").await?;
    Ok(Json(doc.into()))
}

/// GET /api/documents/:id/download
pub async fn handle_document_download(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<DocumentDownload>, AppError> {
    let doc = find_document(&state, id, "Failed to process download").await?;
    Ok(Json(doc.into()))
}

/// Looks a document up by path id. Ids that are not integers cannot name a
/// row, so they are reported as missing.
async fn find_document(
    state: &AppState,
    id: Result<Path<i32>, PathRejection>,
    failure: &'static str,
) -> Result<Document, AppError> {
    let Ok(Path(id)) = id else {
        return Err(AppError::NotFound(DOCUMENT_NOT_FOUND));
    };

    state
        .store
        .get_document(id)
        .await
        .map_err(AppError::failed(failure))?
        .ok_or(AppError::NotFound(DOCUMENT_NOT_FOUND))
}
