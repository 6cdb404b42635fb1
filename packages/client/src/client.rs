use std::time::Duration;

use reqwest::multipart;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::types::{
    BulkDeleteResponse, ChatRequest, ChatResponse, DocumentInfo, DocumentUploadResponse,
    HealthStatus,
};

/// Default per-request timeout. The backend can take a while on large
/// uploads (parse + chunk + embed happens synchronously server-side), so
/// this is deliberately generous.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Error body shape used by the backend for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: String,
}

/// HTTP API client for the UW Companion backend.
///
/// Stateless beyond the base URL: no retries, no caching, failures propagate
/// to the caller as [`ApiError`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::transport)?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Upload a document for parsing and indexing.
    pub async fn upload_document(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> ApiResult<DocumentUploadResponse> {
        tracing::debug!(%filename, size = bytes.len(), "uploading document");

        let part = multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(format!("{}/api/documents/upload", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(ApiError::transport)?;

        Self::decode(response).await
    }

    /// List all indexed documents.
    pub async fn list_documents(&self) -> ApiResult<Vec<DocumentInfo>> {
        let response = self
            .http
            .get(format!("{}/api/documents", self.base_url))
            .send()
            .await
            .map_err(ApiError::transport)?;

        Self::decode(response).await
    }

    /// Remove one document and its chunks from the backend index.
    pub async fn delete_document(&self, document_id: &str) -> ApiResult<()> {
        let response = self
            .http
            .delete(format!("{}/api/documents/{}", self.base_url, document_id))
            .send()
            .await
            .map_err(ApiError::transport)?;

        Self::expect_success(response).await
    }

    /// Remove several documents in one call; each id gets its own outcome.
    pub async fn bulk_delete(&self, document_ids: &[String]) -> ApiResult<BulkDeleteResponse> {
        let response = self
            .http
            .post(format!("{}/api/documents/bulk-delete", self.base_url))
            .json(document_ids)
            .send()
            .await
            .map_err(ApiError::transport)?;

        Self::decode(response).await
    }

    /// Send a chat query. The session id lets the backend keep
    /// conversational context between calls.
    pub async fn chat(&self, query: &str, session_id: &str) -> ApiResult<ChatResponse> {
        tracing::debug!(%session_id, "sending chat query");

        let request = ChatRequest {
            query: query.to_string(),
            session_id: session_id.to_string(),
        };

        let response = self
            .http
            .post(format!("{}/api/chat", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(ApiError::transport)?;

        Self::decode(response).await
    }

    /// Drop the backend's conversational history for a session.
    pub async fn clear_session(&self, session_id: &str) -> ApiResult<()> {
        let response = self
            .http
            .delete(format!("{}/api/chat/session/{}", self.base_url, session_id))
            .send()
            .await
            .map_err(ApiError::transport)?;

        Self::expect_success(response).await
    }

    /// Probe backend health. Callers treat any failure as "disconnected".
    pub async fn health_check(&self) -> ApiResult<HealthStatus> {
        let response = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .map_err(ApiError::transport)?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::server_error(status, response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    async fn expect_success(response: Response) -> ApiResult<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::server_error(status, response).await)
        }
    }

    async fn server_error(status: StatusCode, response: Response) -> ApiError {
        let detail = match response.json::<ErrorBody>().await {
            Ok(body) if !body.detail.is_empty() => body.detail,
            _ => status.to_string(),
        };
        ApiError::Server {
            status: status.as_u16(),
            detail,
        }
    }
}
