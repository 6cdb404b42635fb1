use uwc_client::types::ChatResponse;

use super::{Message, MessageRole};

/// Append-only transcript with monotonically increasing message ids.
///
/// Ids are unique and strictly increasing within a session; entries are
/// never reordered or removed except by [`Transcript::clear`], which starts
/// a fresh id sequence for the next session.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, role: MessageRole, content: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message::new(id, role, content));
        id
    }

    /// Append a user message, returning its id
    pub fn push_user(&mut self, content: impl Into<String>) -> u64 {
        self.push(MessageRole::User, content.into())
    }

    /// Append a plain assistant message (status or error text), returning its id
    pub fn push_assistant(&mut self, content: impl Into<String>) -> u64 {
        self.push(MessageRole::Assistant, content.into())
    }

    /// Append an assistant message carrying a full backend response
    pub fn push_response(&mut self, response: ChatResponse) -> u64 {
        let id = self.push(MessageRole::Assistant, response.answer);
        // push() appended the entry, last_mut() cannot fail here
        let message = self.messages.last_mut().expect("message was just pushed");
        message.report = Some(response.hallucination);
        message.sources = response.sources;
        message.actions = response.actions;
        id
    }

    /// Replace the content of an existing entry in place.
    ///
    /// Used for the optimistic upload slot: the "Uploading …" placeholder
    /// becomes the confirmation or failure text without changing its
    /// position in the transcript. Returns false if the id is unknown.
    pub fn replace_content(&mut self, id: u64, content: impl Into<String>) -> bool {
        match self.messages.iter_mut().find(|m| m.id == id) {
            Some(message) => {
                message.content = content.into();
                message.timestamp = chrono::Utc::now();
                true
            }
            None => false,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn get(&self, id: u64) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Most recent assistant entry that has expandable detail
    pub fn last_detailed(&self) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.has_detail())
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop all entries and restart the id sequence
    pub fn clear(&mut self) {
        self.messages.clear();
        self.next_id = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uwc_client::types::{HallucinationReport, RiskRating};

    fn response(answer: &str) -> ChatResponse {
        ChatResponse {
            answer: answer.to_string(),
            sources: Vec::new(),
            hallucination: HallucinationReport {
                overall_score: 90.0,
                retrieval_confidence: 90.0,
                response_grounding: 90.0,
                numerical_fidelity: 90.0,
                entity_consistency: 90.0,
                sentence_details: Vec::new(),
                flagged_claims: Vec::new(),
                rating: RiskRating::Low,
            },
            actions: Vec::new(),
            session_id: "s".to_string(),
        }
    }

    #[test]
    fn test_ids_strictly_increase() {
        let mut transcript = Transcript::new();
        let a = transcript.push_user("first");
        let b = transcript.push_assistant("second");
        let c = transcript.push_user("third");

        assert!(a < b && b < c);
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.messages()[0].content, "first");
        assert_eq!(transcript.messages()[2].content, "third");
    }

    #[test]
    fn test_push_response_attaches_report() {
        let mut transcript = Transcript::new();
        let id = transcript.push_response(response("answer text"));

        let message = transcript.get(id).unwrap();
        assert_eq!(message.role, MessageRole::Assistant);
        assert_eq!(message.content, "answer text");
        assert!(message.report.is_some());
        assert!(message.has_detail());
    }

    #[test]
    fn test_replace_content_targets_one_entry() {
        let mut transcript = Transcript::new();
        let first = transcript.push_assistant("Uploading policy.pdf…");
        let second = transcript.push_user("unrelated");

        assert!(transcript.replace_content(first, "Indexed policy.pdf"));
        assert_eq!(transcript.get(first).unwrap().content, "Indexed policy.pdf");
        assert_eq!(transcript.get(second).unwrap().content, "unrelated");

        assert!(!transcript.replace_content(999, "nope"));
    }

    #[test]
    fn test_clear_restarts_id_sequence() {
        let mut transcript = Transcript::new();
        transcript.push_user("one");
        transcript.push_user("two");

        transcript.clear();
        assert!(transcript.is_empty());
        assert_eq!(transcript.push_user("fresh"), 0);
    }

    #[test]
    fn test_last_detailed_skips_plain_messages() {
        let mut transcript = Transcript::new();
        let detailed = transcript.push_response(response("with report"));
        transcript.push_assistant("plain status line");

        assert_eq!(transcript.last_detailed().unwrap().id, detailed);
    }
}
