pub mod health;

use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::chat::handlers as chat;
use crate::contact::handlers as contact;
use crate::portfolio::handlers as portfolio;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Portfolio content (read-only)
        .route("/api/experiences", get(portfolio::handle_list_experiences))
        .route("/api/documents", get(portfolio::handle_list_documents))
        .route(
            "/api/documents/:id/preview",
            get(portfolio::handle_document_preview),
        )
        .route(
            "/api/documents/:id/download",
            get(portfolio::handle_document_download),
        )
        .route("/api/skills", get(portfolio::handle_list_skills))
        // Submissions
        .route("/api/chat", post(chat::handle_chat))
        .route("/api/contact", post(contact::handle_contact))
        .with_state(state)
}

/// Mounts the document files and, when present, the client bundle.
///
/// Document paths are stored as `/attached_assets/<file>`, and download links
/// as `/downloads/attached_assets/<file>`; both resolve into `assets_dir`.
/// Unmatched paths fall through to the bundle's `index.html`.
pub fn with_static_files(router: Router, assets_dir: &Path, static_dir: Option<&Path>) -> Router {
    let router = router
        .nest_service("/attached_assets", ServeDir::new(assets_dir))
        .nest_service("/downloads/attached_assets", ServeDir::new(assets_dir));

    match static_dir {
        Some(dir) => router.fallback_service(
            ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html"))),
        ),
        None => router,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::assistant::prompts::UNAVAILABLE_RESPONSE;
    use crate::assistant::Assistant;
    use crate::errors::CHAT_APOLOGY;
    use crate::seed::seed_portfolio;
    use crate::storage::memory::MemoryStore;
    use crate::storage::PortfolioStore;

    async fn seeded_store() -> Arc<MemoryStore> {
        let store = Arc::new(MemoryStore::new());
        seed_portfolio(store.as_ref()).await.unwrap();
        store
    }

    fn app(store: Arc<MemoryStore>) -> Router {
        build_router(AppState {
            store,
            assistant: Assistant::new(None),
        })
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        post_raw(uri, body.to_string())
    }

    fn post_raw(uri: &str, body: impl Into<String>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.into()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_offline_assistant() {
        let (status, body) = send(app(Arc::new(MemoryStore::new())), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["assistant"], "offline");
    }

    #[tokio::test]
    async fn test_experiences_list_current_last() {
        let (status, body) = send(app(seeded_store().await), get("/api/experiences")).await;
        assert_eq!(status, StatusCode::OK);
        let list = body.as_array().unwrap();
        assert_eq!(list.len(), 4);
        assert_eq!(list[0]["company"], "Nokia Solutions and Networks India");
        assert_eq!(list[3]["current"], true);
        assert!(list[3]["achievements"].as_array().unwrap().len() > 1);
    }

    #[tokio::test]
    async fn test_documents_order_is_stable() {
        let store = seeded_store().await;
        let (_, first) = send(app(store.clone()), get("/api/documents")).await;
        let (_, second) = send(app(store), get("/api/documents")).await;
        assert_eq!(first, second);
        assert_eq!(first[0]["title"], "API Overview Documentation");
        assert_eq!(first[0]["type"], "API Guide");
        assert_eq!(first[3]["title"], "API Week 2 Assignment");
    }

    #[tokio::test]
    async fn test_skills_in_insertion_order() {
        let (status, body) = send(app(seeded_store().await), get("/api/skills")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 24);
        assert_eq!(body[0]["name"], "Adobe FrameMaker");
        assert_eq!(body[0]["proficiency"], 95);
    }

    #[tokio::test]
    async fn test_document_preview_and_download() {
        let store = seeded_store().await;
        let id = store.list_documents().await.unwrap()[1].id;

        let (status, preview) = send(
            app(store.clone()),
            get(&format!("/api/documents/{id}/preview")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            preview,
            json!({
                "title": "Sample User Guide V3.0",
                "type": "User Guide",
                "description": "Professional user guide demonstrating clear step-by-step instructions, feature explanations, and troubleshooting sections.",
                "previewUrl": "/attached_assets/Sample_UserGuide_V3.0.pdf"
            })
        );

        let (status, download) =
            send(app(store), get(&format!("/api/documents/{id}/download"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(download["filePath"], "/attached_assets/Sample_UserGuide_V3.0.pdf");
        assert_eq!(
            download["downloadUrl"],
            "/downloads/attached_assets/Sample_UserGuide_V3.0.pdf"
        );
    }

    #[tokio::test]
    async fn test_unknown_document_is_404_without_side_effects() {
        let store = seeded_store().await;
        let before = store.list_documents().await.unwrap();

        for uri in [
            "/api/documents/9999/preview",
            "/api/documents/9999/download",
            "/api/documents/abc/preview",
        ] {
            let (status, body) = send(app(store.clone()), get(uri)).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(body, json!({ "message": "Document not found" }));
        }

        assert_eq!(store.list_documents().await.unwrap(), before);
        assert_eq!(store.contact_count(), 0);
        assert_eq!(store.chat_count(), 0);
    }

    #[tokio::test]
    async fn test_valid_contact_is_stored() {
        let store = Arc::new(MemoryStore::new());
        let (status, body) = send(
            app(store.clone()),
            post_json(
                "/api/contact",
                json!({
                    "name": "Grace",
                    "email": "grace@example.com",
                    "message": "We have a documentation role open."
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Message sent successfully");
        assert!(body["id"].as_i64().unwrap() > 0);

        let stored = store.list_contact_messages().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].email, "grace@example.com");
    }

    #[tokio::test]
    async fn test_invalid_contact_rejected_before_write() {
        let store = Arc::new(MemoryStore::new());
        let bodies = [
            json!({ "name": "Grace", "email": "grace@example.com", "message": "Hi there" }),
            json!({ "name": "Grace", "message": "We have a documentation role open." }),
            json!({ "name": "G", "email": "grace@example.com", "message": "We have a documentation role open." }),
            json!({ "name": "Grace", "email": "not-an-email", "message": "We have a documentation role open." }),
        ];

        for body in bodies {
            let (status, response) =
                send(app(store.clone()), post_json("/api/contact", body)).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(response, json!({ "message": "Failed to send message" }));
        }

        let (status, _) = send(app(store.clone()), post_raw("/api/contact", "{not json")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        assert_eq!(store.contact_count(), 0);
    }

    #[tokio::test]
    async fn test_chat_without_credential_returns_unavailable() {
        let store = Arc::new(MemoryStore::new());
        let (status, body) = send(
            app(store.clone()),
            post_json("/api/chat", json!({ "message": "What tools do you use?" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "What tools do you use?");
        assert_eq!(body["response"], UNAVAILABLE_RESPONSE);
        assert!(body["timestamp"].is_string());

        let turns = store.list_chat_messages().await.unwrap();
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].response, UNAVAILABLE_RESPONSE);
    }

    #[tokio::test]
    async fn test_invalid_chat_body_returns_apology() {
        let store = Arc::new(MemoryStore::new());
        for request in [
            post_json("/api/chat", json!({ "message": "   " })),
            post_json("/api/chat", json!({ "message": 42 })),
            post_raw("/api/chat", "nope"),
        ] {
            let (status, body) = send(app(store.clone()), request).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body["message"], "Failed to process chat message");
            assert_eq!(body["response"], CHAT_APOLOGY);
        }
        assert_eq!(store.chat_count(), 0);
    }

    #[tokio::test]
    async fn test_store_failures_collapse_to_static_messages() {
        let store = Arc::new(MemoryStore::failing());

        let cases = [
            ("/api/experiences", "Failed to fetch experiences"),
            ("/api/documents", "Failed to fetch documents"),
            ("/api/skills", "Failed to fetch skills"),
            ("/api/documents/1/preview", "Failed to fetch document preview"),
            ("/api/documents/1/download", "Failed to process download"),
        ];
        for (uri, message) in cases {
            let (status, body) = send(app(store.clone()), get(uri)).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
            assert_eq!(body, json!({ "message": message }));
        }

        let (status, body) = send(
            app(store),
            post_json("/api/chat", json!({ "message": "Are you available?" })),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["response"], CHAT_APOLOGY);
    }
}
