use std::collections::HashSet;

use uwc_client::types::{
    ChatResponse, DocumentInfo, DocumentUploadResponse, HealthStatus, RiskRating,
};
use uwc_client::ApiError;

use crate::chat::grounding::banner_worthy;
use crate::chat::Transcript;
use crate::documents::DocumentsState;
use crate::input::history::Recall;
use crate::input::{InputBuffer, InputHistory, InputMode};
use crate::session::Session;
use crate::uploads::{allowed_extension, UploadTracker};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Chat,
    Documents,
    Dashboard,
}

impl Screen {
    pub fn next(self) -> Self {
        match self {
            Screen::Chat => Screen::Documents,
            Screen::Documents => Screen::Dashboard,
            Screen::Dashboard => Screen::Chat,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Chat => "Chat",
            Screen::Documents => "Documents",
            Screen::Dashboard => "Dashboard",
        }
    }
}

/// Backend connectivity as seen by the health probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Unknown,
    Connected,
    Disconnected,
}

/// Low-confidence banner tied to the most recent qualifying response
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub message_id: u64,
    pub score: f32,
    pub rating: RiskRating,
}

/// Application state management.
///
/// Mutated only on the event-loop thread; API completions are folded in via
/// the `apply_*` methods.
#[derive(Debug)]
pub struct AppState {
    pub current_screen: Screen,
    pub transcript: Transcript,
    pub uploads: UploadTracker,
    pub documents: DocumentsState,
    pub session: Session,
    pub connection: ConnectionStatus,
    pub health: Option<HealthStatus>,
    pub input_buffer: InputBuffer,
    pub input_history: InputHistory,
    input_mode: InputMode,
    /// True while a chat request is outstanding; at most one at a time
    awaiting_response: bool,
    /// Bumped on `/clear` so responses from the previous session are dropped
    chat_epoch: u64,
    banner: Option<Banner>,
    /// Ids of messages with their groundedness detail expanded (view state,
    /// kept out of the message entries themselves)
    expanded: HashSet<u64>,
    scroll_offset: usize,
}

impl AppState {
    pub fn new() -> Self {
        let mut state = Self {
            current_screen: Screen::Chat,
            transcript: Transcript::new(),
            uploads: UploadTracker::new(),
            documents: DocumentsState::new(),
            session: Session::new(),
            connection: ConnectionStatus::Unknown,
            health: None,
            input_buffer: InputBuffer::new(),
            input_history: InputHistory::new(),
            input_mode: InputMode::Normal,
            awaiting_response: false,
            chat_epoch: 0,
            banner: None,
            expanded: HashSet::new(),
            scroll_offset: 0,
        };

        state.transcript.push_assistant(
            "Welcome to UW Companion. Upload underwriting documents with /upload <path>, \
             then ask questions about them. Type /help for all commands.",
        );
        state
    }

    // Screen navigation

    pub fn next_screen(&mut self) {
        self.current_screen = self.current_screen.next();
    }

    pub fn set_screen(&mut self, screen: Screen) {
        self.current_screen = screen;
    }

    // Chat state machine

    pub fn is_awaiting_response(&self) -> bool {
        self.awaiting_response
    }

    pub fn chat_epoch(&self) -> u64 {
        self.chat_epoch
    }

    /// Submit the current input as a chat query.
    ///
    /// Returns the query to dispatch, or None when the input is empty or a
    /// chat request is already outstanding (the transcript is untouched in
    /// both cases; no queueing, no overlap).
    pub fn submit_chat(&mut self) -> Option<String> {
        if self.awaiting_response {
            return None;
        }

        let query = self.input_buffer.content().trim().to_string();
        if query.is_empty() {
            return None;
        }

        self.input_history.record(query.clone());
        self.transcript.push_user(query.clone());
        self.awaiting_response = true;
        self.input_buffer.clear();
        self.input_mode = InputMode::Normal;
        self.scroll_to_bottom();

        Some(query)
    }

    /// Fold a successful chat response into the transcript.
    ///
    /// Responses from a cleared session (stale epoch) are dropped.
    pub fn apply_chat_success(&mut self, epoch: u64, response: ChatResponse) {
        if epoch != self.chat_epoch {
            return;
        }
        self.awaiting_response = false;

        let rating = response.hallucination.rating;
        let score = response.hallucination.overall_score;
        let id = self.transcript.push_response(response);

        if banner_worthy(rating) {
            self.banner = Some(Banner {
                message_id: id,
                score,
                rating,
            });
        }
        self.scroll_to_bottom();
    }

    /// Fold a failed chat request into the transcript as a synthetic
    /// assistant entry. Never retried.
    pub fn apply_chat_failure(&mut self, epoch: u64, error: &ApiError) {
        if epoch != self.chat_epoch {
            return;
        }
        self.awaiting_response = false;
        let text = Self::describe_api_error(error);
        self.transcript.push_assistant(text);
        self.scroll_to_bottom();
    }

    /// User-facing text for an API failure, distinguishing an unreachable
    /// backend from a server-reported error.
    pub fn describe_api_error(error: &ApiError) -> String {
        match error {
            ApiError::Unreachable(_) => {
                "The backend could not be reached. Check that the UW Companion server is running."
                    .to_string()
            }
            ApiError::Server { detail, .. } => {
                format!("The backend reported an error: {detail}")
            }
            ApiError::InvalidResponse(detail) => {
                format!("The backend returned an unreadable response: {detail}")
            }
        }
    }

    /// Clear the transcript and start a fresh session.
    ///
    /// Returns the previous session id so the caller can fire a best-effort
    /// backend clear for it.
    pub fn clear_chat(&mut self) -> String {
        self.transcript.clear();
        self.banner = None;
        self.expanded.clear();
        self.awaiting_response = false;
        self.chat_epoch += 1;
        self.scroll_offset = 0;
        self.session.rotate()
    }

    // Uploads

    /// Validate and register an upload, appending its optimistic slot.
    ///
    /// Disallowed extensions never reach the network: they append exactly
    /// one rejection message and return None. On success, returns the
    /// tracking id for the dispatched upload.
    pub fn begin_upload(&mut self, filename: &str) -> Option<u64> {
        if !allowed_extension(filename) {
            self.transcript.push_assistant(format!(
                "{filename} is not a supported file type. Allowed: PDF, DOCX, DOC."
            ));
            self.scroll_to_bottom();
            return None;
        }

        let message_id = self.transcript.push_assistant(format!("Uploading {filename}…"));
        self.scroll_to_bottom();
        Some(self.uploads.begin(filename, message_id))
    }

    /// Replace an upload's optimistic slot with its confirmation and add the
    /// document to the local list.
    pub fn apply_upload_success(&mut self, upload_id: u64, response: DocumentUploadResponse) {
        let Some(pending) = self.uploads.finish(upload_id) else {
            return;
        };

        self.transcript.replace_content(
            pending.message_id,
            format!(
                "Indexed {}: {} pages, {} chunks.",
                response.filename, response.num_pages, response.num_chunks
            ),
        );

        self.documents.prepend(DocumentInfo {
            document_id: response.document_id,
            filename: response.filename,
            num_chunks: response.num_chunks,
            num_pages: response.num_pages,
            upload_time: chrono::Utc::now().to_rfc3339(),
        });
    }

    /// Replace an upload's optimistic slot with a failure message naming the
    /// file. Other uploads are unaffected.
    pub fn apply_upload_failure(&mut self, upload_id: u64, detail: &str) {
        let Some(pending) = self.uploads.finish(upload_id) else {
            return;
        };

        self.transcript.replace_content(
            pending.message_id,
            format!("Upload failed for {}: {detail}", pending.filename),
        );
    }

    // Banner

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    // Expand/collapse of groundedness detail (view state keyed by id)

    pub fn is_expanded(&self, message_id: u64) -> bool {
        self.expanded.contains(&message_id)
    }

    pub fn toggle_expanded(&mut self, message_id: u64) {
        if !self.expanded.remove(&message_id) {
            self.expanded.insert(message_id);
        }
    }

    /// Toggle detail on the most recent message that has any
    pub fn toggle_latest_detail(&mut self) -> bool {
        match self.transcript.last_detailed() {
            Some(message) => {
                let id = message.id;
                self.toggle_expanded(id);
                true
            }
            None => false,
        }
    }

    // Connectivity

    /// Fold a health probe result. A failed probe only flips the indicator;
    /// it never blocks chat or surfaces an error.
    pub fn apply_health(&mut self, health: Option<HealthStatus>) {
        self.connection = match health {
            Some(_) => ConnectionStatus::Connected,
            None => ConnectionStatus::Disconnected,
        };
        if health.is_some() {
            self.health = health;
        }
    }

    // Input mode

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn enter_filter_mode(&mut self) {
        self.input_mode = InputMode::Filter;
    }

    pub fn exit_filter_mode(&mut self) {
        if self.input_mode == InputMode::Filter {
            self.input_mode = InputMode::Normal;
        }
    }

    // Input history recall (Up/Down on the chat input)

    pub fn recall_older(&mut self) -> bool {
        let current = self.input_buffer.content().to_string();
        match self.input_history.older(&current) {
            Some(entry) => {
                let entry = entry.to_string();
                self.input_buffer.set_content(&entry);
                self.input_mode = InputMode::History;
                true
            }
            None => false,
        }
    }

    pub fn recall_newer(&mut self) -> bool {
        match self.input_history.newer() {
            Some(Recall::Entry(entry)) => {
                self.input_buffer.set_content(&entry);
                true
            }
            Some(Recall::Draft(draft)) => {
                self.input_buffer.set_content(&draft);
                self.input_mode = InputMode::Normal;
                true
            }
            None => false,
        }
    }

    pub fn cancel_recall(&mut self) -> bool {
        if !self.input_history.is_navigating() {
            return false;
        }
        let draft = self.input_history.cancel().unwrap_or_default();
        self.input_buffer.set_content(&draft);
        self.input_mode = InputMode::Normal;
        true
    }

    /// Editing a recalled entry detaches it from history navigation; the
    /// buffer keeps whatever is being edited.
    pub fn detach_recall(&mut self) {
        if self.input_history.is_navigating() {
            let _ = self.input_history.cancel();
            self.input_mode = InputMode::Normal;
        }
    }

    // Transcript scrolling (offset counts lines up from the bottom)

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Scroll towards older messages. A user scroll also dismisses the
    /// banner (implicit dismissal).
    pub fn scroll_up(&mut self) {
        // Rough upper bound; the widget clamps precisely at render time
        let max = self.transcript.len().saturating_mul(4);
        if self.scroll_offset < max {
            self.scroll_offset += 1;
        }
        self.dismiss_banner();
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
        self.dismiss_banner();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
