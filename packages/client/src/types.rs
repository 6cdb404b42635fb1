use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
    pub session_id: String,
}

/// Excerpt from an indexed document that grounded part of an answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceReference {
    pub text: String,
    pub source: String,
    pub page: u32,
    pub similarity: f32,
}

/// Per-sentence grounding annotation inside a hallucination report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceGrounding {
    pub sentence: String,
    pub grounding_score: f32,
    pub best_source: String,
    pub is_grounded: bool,
}

/// Hallucination-risk rating assigned by the backend from the overall score.
///
/// Note the inversion: a *low* risk rating corresponds to a *high*
/// groundedness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskRating {
    Low,
    Medium,
    High,
}

/// Groundedness report attached to every chat answer.
///
/// All scores are 0-100; 0 means fully hallucinated, 100 fully grounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HallucinationReport {
    pub overall_score: f32,
    pub retrieval_confidence: f32,
    pub response_grounding: f32,
    pub numerical_fidelity: f32,
    pub entity_consistency: f32,
    pub sentence_details: Vec<SentenceGrounding>,
    pub flagged_claims: Vec<String>,
    pub rating: RiskRating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionCategory {
    CoverageGap,
    RiskFlag,
    Endorsement,
    Compliance,
    Pricing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionPriority {
    Critical,
    High,
    Medium,
    Low,
}

/// Recommended underwriting action extracted from an answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UwAction {
    pub action: String,
    pub category: ActionCategory,
    pub priority: ActionPriority,
    pub details: String,
    pub source_reference: String,
}

/// Body of a successful `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    pub sources: Vec<SourceReference>,
    pub hallucination: HallucinationReport,
    pub actions: Vec<UwAction>,
    pub session_id: String,
}

/// Body of a successful `POST /api/documents/upload`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentUploadResponse {
    pub document_id: String,
    pub filename: String,
    pub num_chunks: u32,
    pub num_pages: u32,
    pub status: String,
}

/// One entry of `GET /api/documents`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub document_id: String,
    pub filename: String,
    pub num_chunks: u32,
    pub num_pages: u32,
    pub upload_time: String,
}

/// Per-document outcome of `POST /api/documents/bulk-delete`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkDeleteOutcome {
    pub document_id: String,
    pub deleted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkDeleteResponse {
    pub results: Vec<BulkDeleteOutcome>,
}

/// Body of `GET /health`.
///
/// The backend reports which provider backends it was configured with; all
/// fields beyond `status` are advisory and default when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub llm_backend: Option<String>,
    #[serde(default)]
    pub embedding_backend: Option<String>,
    #[serde(default)]
    pub vector_store_backend: Option<String>,
    #[serde(default)]
    pub gemini_configured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_wire_casing() {
        assert_eq!(serde_json::to_string(&RiskRating::Low).unwrap(), "\"low\"");
        let parsed: RiskRating = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, RiskRating::Medium);
    }

    #[test]
    fn test_action_category_wire_casing() {
        assert_eq!(
            serde_json::to_string(&ActionCategory::CoverageGap).unwrap(),
            "\"coverage_gap\""
        );
        let parsed: ActionCategory = serde_json::from_str("\"risk_flag\"").unwrap();
        assert_eq!(parsed, ActionCategory::RiskFlag);
    }

    #[test]
    fn test_health_status_defaults() {
        let health: HealthStatus = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert_eq!(health.status, "ok");
        assert!(health.llm_backend.is_none());
        assert!(!health.gemini_configured);
    }

    #[test]
    fn test_chat_response_decodes() {
        let body = r#"{
            "answer": "The policy excludes flood damage.",
            "sources": [{"text": "excerpt", "source": "policy.pdf", "page": 3, "similarity": 0.87}],
            "hallucination": {
                "overall_score": 42.0,
                "retrieval_confidence": 50.0,
                "response_grounding": 40.0,
                "numerical_fidelity": 35.0,
                "entity_consistency": 45.0,
                "sentence_details": [
                    {"sentence": "The policy excludes flood damage.", "grounding_score": 42.0, "best_source": "policy.pdf", "is_grounded": false}
                ],
                "flagged_claims": ["flood damage"],
                "rating": "high"
            },
            "actions": [
                {"action": "Review flood exclusion", "category": "coverage_gap", "priority": "critical", "details": "Exclusion conflicts with schedule.", "source_reference": "policy.pdf p.3"}
            ],
            "session_id": "abc"
        }"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.hallucination.rating, RiskRating::High);
        assert_eq!(response.actions[0].category, ActionCategory::CoverageGap);
        assert_eq!(response.actions[0].priority, ActionPriority::Critical);
        assert_eq!(response.sources[0].page, 3);
    }
}
