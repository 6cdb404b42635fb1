use std::collections::HashMap;
use std::path::Path;

/// File extensions the backend can parse, checked before any I/O happens.
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["pdf", "docx", "doc"];

/// Case-insensitive extension check against the allow-list
pub fn allowed_extension(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ALLOWED_EXTENSIONS.iter().any(|a| ext.eq_ignore_ascii_case(a)))
        .unwrap_or(false)
}

/// An upload that has been dispatched but not yet confirmed or failed.
#[derive(Debug, Clone)]
pub struct PendingUpload {
    pub filename: String,
    /// Transcript id of the optimistic "Uploading …" slot
    pub message_id: u64,
}

/// Tracks in-flight uploads.
///
/// Uploads are independent of chat and of each other; any number may be
/// outstanding at once, each keyed by its own id.
#[derive(Debug, Default)]
pub struct UploadTracker {
    pending: HashMap<u64, PendingUpload>,
    next_id: u64,
}

impl UploadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a dispatched upload, returning its tracking id
    pub fn begin(&mut self, filename: impl Into<String>, message_id: u64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.insert(
            id,
            PendingUpload {
                filename: filename.into(),
                message_id,
            },
        );
        id
    }

    /// Settle an upload, returning its record
    pub fn finish(&mut self, upload_id: u64) -> Option<PendingUpload> {
        self.pending.remove(&upload_id)
    }

    /// True while at least one upload is outstanding
    pub fn is_busy(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }
}
