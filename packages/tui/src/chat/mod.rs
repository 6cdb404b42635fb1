use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uwc_client::types::{HallucinationReport, SourceReference, UwAction};

pub mod grounding;
pub mod transcript;

pub use transcript::Transcript;

/// Represents who authored a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageRole {
    User,
    Assistant,
}

/// One entry in the chat transcript.
///
/// Identity is a monotonically increasing integer assigned by the
/// [`Transcript`]; entries are never edited after creation, except that an
/// upload placeholder's content is replaced in place when the upload
/// completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub report: Option<HallucinationReport>,
    pub sources: Vec<SourceReference>,
    pub actions: Vec<UwAction>,
}

impl Message {
    pub(crate) fn new(id: u64, role: MessageRole, content: String) -> Self {
        Self {
            id,
            role,
            content,
            timestamp: Utc::now(),
            report: None,
            sources: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Get a display-friendly author label
    pub fn role_label(&self) -> &'static str {
        match self.role {
            MessageRole::User => "You",
            MessageRole::Assistant => "Assistant",
        }
    }

    /// Whether the entry carries expandable groundedness detail
    pub fn has_detail(&self) -> bool {
        self.report.is_some() || !self.sources.is_empty() || !self.actions.is_empty()
    }
}
