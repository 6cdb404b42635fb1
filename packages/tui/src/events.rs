use crossterm::event::{self, Event, KeyEvent};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use uwc_client::types::{BulkDeleteResponse, ChatResponse, DocumentInfo, DocumentUploadResponse, HealthStatus};
use uwc_client::ApiError;

/// Event types for the TUI application.
///
/// Key/tick events come from the terminal poll task; the remaining variants
/// are completions of spawned API calls, folded into state on the single
/// event-loop thread. Transcript order therefore follows completion order,
/// not issuance order.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Quit,
    ChatFinished {
        epoch: u64,
        result: Result<ChatResponse, ApiError>,
    },
    UploadFinished {
        upload_id: u64,
        result: Result<DocumentUploadResponse, String>,
    },
    DocumentsLoaded(Result<Vec<DocumentInfo>, ApiError>),
    DocumentDeleted {
        document_id: String,
        result: Result<(), ApiError>,
    },
    BulkDeleteFinished(Result<BulkDeleteResponse, ApiError>),
    /// None means the probe failed; treated as "disconnected", never an error
    HealthChecked(Option<HealthStatus>),
}

/// Event handler bridging terminal input, the periodic tick, and async API
/// completions onto one channel
pub struct EventHandler {
    sender: mpsc::UnboundedSender<AppEvent>,
    receiver: mpsc::UnboundedReceiver<AppEvent>,
    poller: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(tick_rate: u64) -> Self {
        let tick_rate = Duration::from_millis(tick_rate);
        let (sender, receiver) = mpsc::unbounded_channel();
        let poll_sender = sender.clone();

        let poller = tokio::spawn(async move {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or_else(|| Duration::from_secs(0));

                if let Ok(has_event) = event::poll(timeout) {
                    if has_event {
                        if let Ok(Event::Key(key)) = event::read() {
                            if key.kind == event::KeyEventKind::Press
                                && poll_sender.send(AppEvent::Key(key)).is_err()
                            {
                                break;
                            }
                        }
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if poll_sender.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self {
            sender,
            receiver,
            poller,
        }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.receiver.recv().await
    }

    /// Sender handle for spawned API tasks to report completions through
    pub fn sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.sender.clone()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.poller.abort();
    }
}
