use uuid::Uuid;

/// Opaque per-launch session identity sent with every chat request.
///
/// The backend keys its conversational history on this value; rotating it
/// starts a fresh conversation server-side.
#[derive(Debug, Clone)]
pub struct Session {
    id: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Replace the session id, returning the previous one so the caller can
    /// fire a best-effort backend clear for it.
    pub fn rotate(&mut self) -> String {
        std::mem::replace(&mut self.id, Uuid::new_v4().to_string())
    }

    /// Short prefix for display in the status bar
    pub fn short_id(&self) -> &str {
        &self.id[..self.id.len().min(8)]
    }
}
