//! Integration tests for the API client against a mock backend.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use uwc_client::types::{ActionCategory, ActionPriority, RiskRating};
use uwc_client::{ApiClient, ApiError};

fn chat_body() -> serde_json::Value {
    json!({
        "answer": "The submission lists a TIV of $4.2M.",
        "sources": [
            {"text": "Total insured value: $4,200,000", "source": "submission.pdf", "page": 2, "similarity": 0.91}
        ],
        "hallucination": {
            "overall_score": 86.0,
            "retrieval_confidence": 90.0,
            "response_grounding": 88.0,
            "numerical_fidelity": 82.0,
            "entity_consistency": 84.0,
            "sentence_details": [
                {"sentence": "The submission lists a TIV of $4.2M.", "grounding_score": 86.0, "best_source": "submission.pdf", "is_grounded": true}
            ],
            "flagged_claims": [],
            "rating": "low"
        },
        "actions": [
            {"action": "Confirm TIV against schedule", "category": "pricing", "priority": "medium",
             "details": "Schedule total differs from the stated TIV.", "source_reference": "submission.pdf p.2"}
        ],
        "session_id": "session-1"
    })
}

#[tokio::test]
async fn chat_decodes_full_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(json!({"query": "What is the TIV?", "session_id": "session-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_body()))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    let response = client.chat("What is the TIV?", "session-1").await.unwrap();

    assert_eq!(response.answer, "The submission lists a TIV of $4.2M.");
    assert_eq!(response.hallucination.rating, RiskRating::Low);
    assert_eq!(response.sources.len(), 1);
    assert_eq!(response.sources[0].page, 2);
    assert_eq!(response.actions[0].category, ActionCategory::Pricing);
    assert_eq!(response.actions[0].priority, ActionPriority::Medium);
    assert_eq!(response.session_id, "session-1");
}

#[tokio::test]
async fn server_detail_message_is_extracted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"detail": "Query cannot be empty"})),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    let err = client.chat("", "session-1").await.unwrap_err();

    match err {
        ApiError::Server { status, detail } => {
            assert_eq!(status, 400);
            assert_eq!(detail, "Query cannot be empty");
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_detail_falls_back_to_status_line() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/documents"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    let err = client.list_documents().await.unwrap_err();

    match err {
        ApiError::Server { status, detail } => {
            assert_eq!(status, 503);
            assert!(!detail.is_empty());
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn stopped_server_maps_to_unreachable() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = ApiClient::new(uri).unwrap();
    let err = client.health_check().await.unwrap_err();
    assert!(err.is_unreachable());
}

#[tokio::test]
async fn upload_document_roundtrip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/documents/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "document_id": "doc-1",
            "filename": "policy.pdf",
            "num_chunks": 14,
            "num_pages": 6,
            "status": "indexed"
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    let response = client
        .upload_document("policy.pdf", b"%PDF-1.7 fake".to_vec())
        .await
        .unwrap();

    assert_eq!(response.document_id, "doc-1");
    assert_eq!(response.num_chunks, 14);
    assert_eq!(response.num_pages, 6);
    assert_eq!(response.status, "indexed");
}

#[tokio::test]
async fn list_and_delete_documents() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"document_id": "doc-1", "filename": "policy.pdf", "num_chunks": 14, "num_pages": 6,
             "upload_time": "2026-02-10T10:00:00Z"},
            {"document_id": "doc-2", "filename": "loss-runs.docx", "num_chunks": 8, "num_pages": 3,
             "upload_time": "2026-02-11T09:30:00Z"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/documents/doc-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "deleted", "document_id": "doc-1"})),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();

    let documents = client.list_documents().await.unwrap();
    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].document_id, "doc-1");

    client.delete_document("doc-1").await.unwrap();
}

#[tokio::test]
async fn bulk_delete_reports_per_document_outcomes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/documents/bulk-delete"))
        .and(body_json(json!(["doc-1", "doc-404"])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"document_id": "doc-1", "deleted": true},
                {"document_id": "doc-404", "deleted": false}
            ]
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    let response = client
        .bulk_delete(&["doc-1".to_string(), "doc-404".to_string()])
        .await
        .unwrap();

    assert_eq!(response.results.len(), 2);
    assert!(response.results[0].deleted);
    assert!(!response.results[1].deleted);
}

#[tokio::test]
async fn health_check_decodes_feature_flags() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "llm_backend": "gemini",
            "embedding_backend": "gemini",
            "vector_store_backend": "lancedb",
            "gemini_configured": true
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    let health = client.health_check().await.unwrap();

    assert_eq!(health.status, "ok");
    assert_eq!(health.llm_backend.as_deref(), Some("gemini"));
    assert!(health.gemini_configured);
}

#[tokio::test]
async fn clear_session_tolerates_opaque_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/chat/session/session-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "cleared", "session_id": "session-1"})),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    client.clear_session("session-1").await.unwrap();
}
