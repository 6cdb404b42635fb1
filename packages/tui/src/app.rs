use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::CrosstermBackend, Terminal};
use uwc_client::ApiClient;

use crate::commands::SlashCommand;
use crate::events::{AppEvent, EventHandler};
use crate::input::InputMode;
use crate::state::{AppState, Screen};
use crate::ui;

/// Health probe cadence in ticks (250ms tick rate → every 10s)
const HEALTH_PROBE_TICKS: u64 = 40;

/// Main TUI application struct
pub struct App {
    pub state: AppState,
    client: Arc<ApiClient>,
    events: EventHandler,
    should_quit: bool,
    tick_count: u64,
}

impl App {
    pub fn new(client: ApiClient) -> Self {
        Self {
            state: AppState::new(),
            client: Arc::new(client),
            events: EventHandler::new(250),
            should_quit: false,
            tick_count: 0,
        }
    }

    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        // Probe connectivity and load the document list on startup
        self.dispatch_health_check();
        self.dispatch_documents_refresh();

        while !self.should_quit {
            terminal.draw(|frame| {
                ui::render(frame, &self.state);
            })?;

            if let Some(event) = self.events.next().await {
                match event {
                    AppEvent::Key(key) => self.handle_key_event(key),
                    AppEvent::Tick => {
                        self.tick_count += 1;
                        if self.tick_count % HEALTH_PROBE_TICKS == 0 {
                            self.dispatch_health_check();
                        }
                    }
                    AppEvent::Quit => self.quit(),
                    AppEvent::ChatFinished { epoch, result } => match result {
                        Ok(response) => self.state.apply_chat_success(epoch, response),
                        Err(error) => {
                            tracing::warn!(%error, "chat request failed");
                            self.state.apply_chat_failure(epoch, &error);
                        }
                    },
                    AppEvent::UploadFinished { upload_id, result } => match result {
                        Ok(response) => self.state.apply_upload_success(upload_id, response),
                        Err(detail) => {
                            tracing::warn!(%detail, "upload failed");
                            self.state.apply_upload_failure(upload_id, &detail);
                        }
                    },
                    AppEvent::DocumentsLoaded(result) => match result {
                        Ok(documents) => self.state.documents.set_documents(documents),
                        Err(error) => {
                            // List left untouched; the screen shows a notice
                            tracing::warn!(%error, "document list refresh failed");
                            self.state
                                .documents
                                .set_notice(AppState::describe_api_error(&error));
                        }
                    },
                    AppEvent::DocumentDeleted {
                        document_id,
                        result,
                    } => match result {
                        Ok(()) => {
                            self.state.documents.remove(&document_id);
                        }
                        Err(error) => {
                            tracing::warn!(%document_id, %error, "delete failed");
                            self.state
                                .documents
                                .set_notice(AppState::describe_api_error(&error));
                        }
                    },
                    AppEvent::BulkDeleteFinished(result) => match result {
                        Ok(response) => {
                            let confirmed: Vec<String> = response
                                .results
                                .into_iter()
                                .filter(|r| r.deleted)
                                .map(|r| r.document_id)
                                .collect();
                            self.state.documents.remove_many(&confirmed);
                        }
                        Err(error) => {
                            tracing::warn!(%error, "bulk delete failed");
                            self.state
                                .documents
                                .set_notice(AppState::describe_api_error(&error));
                        }
                    },
                    AppEvent::HealthChecked(health) => self.state.apply_health(health),
                }
            }
        }

        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => {
                    self.quit();
                    return;
                }
                KeyCode::Char('e') => {
                    self.state.toggle_latest_detail();
                    return;
                }
                KeyCode::Char('b') => {
                    self.state.dismiss_banner();
                    return;
                }
                _ => {}
            }
        }

        match self.state.current_screen {
            Screen::Chat => self.handle_chat_key(key.code),
            Screen::Documents => self.handle_documents_key(key.code),
            Screen::Dashboard => self.handle_dashboard_key(key.code),
        }
    }

    fn handle_chat_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => {
                self.state.detach_recall();
                self.state.input_buffer.insert_char(c);
            }
            KeyCode::Backspace => {
                self.state.detach_recall();
                self.state.input_buffer.backspace();
            }
            KeyCode::Delete => {
                self.state.detach_recall();
                self.state.input_buffer.delete_char();
            }
            KeyCode::Left => {
                self.state.input_buffer.move_left();
            }
            KeyCode::Right => {
                self.state.input_buffer.move_right();
            }
            KeyCode::Home => self.state.input_buffer.move_to_start(),
            KeyCode::End => self.state.input_buffer.move_to_end(),
            KeyCode::Up => {
                if !self.state.recall_older() {
                    self.state.scroll_up();
                }
            }
            KeyCode::Down => {
                if !self.state.recall_newer() {
                    self.state.scroll_down();
                }
            }
            KeyCode::PageUp => self.state.scroll_up(),
            KeyCode::PageDown => self.state.scroll_down(),
            KeyCode::Enter => self.handle_input_submission(),
            KeyCode::Esc => {
                if !self.state.cancel_recall() {
                    if self.state.banner().is_some() {
                        self.state.dismiss_banner();
                    } else {
                        self.state.input_buffer.clear();
                    }
                }
            }
            KeyCode::Tab => {
                if self.state.input_buffer.is_empty() {
                    self.state.next_screen();
                }
            }
            _ => {}
        }
    }

    fn handle_documents_key(&mut self, code: KeyCode) {
        if self.state.input_mode() == InputMode::Filter {
            match code {
                KeyCode::Char(c) => self.state.documents.push_filter_char(c),
                KeyCode::Backspace => self.state.documents.pop_filter_char(),
                KeyCode::Enter | KeyCode::Esc => self.state.exit_filter_mode(),
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Char('/') => self.state.enter_filter_mode(),
            KeyCode::Char('r') => self.dispatch_documents_refresh(),
            KeyCode::Char('s') => self.state.documents.cycle_sort(),
            KeyCode::Char('a') => self.state.documents.select_all_filtered(),
            KeyCode::Char('c') => self.state.documents.clear_selection(),
            KeyCode::Char(' ') => {
                if let Some(id) = self
                    .state
                    .documents
                    .cursor_document()
                    .map(|d| d.document_id.clone())
                {
                    self.state.documents.toggle_select(&id);
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self
                    .state
                    .documents
                    .cursor_document()
                    .map(|d| d.document_id.clone())
                {
                    self.dispatch_delete(id);
                }
            }
            KeyCode::Char('x') => {
                let selected = self.state.documents.selected_ids();
                if !selected.is_empty() {
                    self.dispatch_bulk_delete(selected);
                }
            }
            KeyCode::Char('q') => self.quit(),
            KeyCode::Up => self.state.documents.move_cursor_up(),
            KeyCode::Down => self.state.documents.move_cursor_down(),
            KeyCode::Esc => {
                self.state.documents.clear_filter();
                self.state.documents.clear_selection();
            }
            KeyCode::Tab => self.state.next_screen(),
            _ => {}
        }
    }

    fn handle_dashboard_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('r') => {
                self.dispatch_health_check();
                self.dispatch_documents_refresh();
            }
            KeyCode::Char('q') => self.quit(),
            KeyCode::Tab => self.state.next_screen(),
            _ => {}
        }
    }

    /// Handle Enter on the chat input: slash commands run locally, anything
    /// else is a chat query.
    fn handle_input_submission(&mut self) {
        let content = self.state.input_buffer.content().trim().to_string();
        if content.is_empty() {
            return;
        }

        if content.starts_with('/') {
            self.state.input_buffer.clear();
            self.state.input_history.record(content.clone());
            match SlashCommand::parse_from_input(&content) {
                Ok((command, arg)) => self.execute_command(command, arg),
                Err(message) => {
                    self.state.transcript.push_assistant(message);
                    self.state.scroll_to_bottom();
                }
            }
            return;
        }

        if let Some(query) = self.state.submit_chat() {
            self.dispatch_chat(query);
        }
    }

    fn execute_command(&mut self, command: SlashCommand, arg: Option<String>) {
        match command {
            SlashCommand::Help => {
                let mut text = String::from("Available commands:\n");
                for command in SlashCommand::built_in_commands() {
                    text.push_str(&format!(
                        "  {:<18} {}\n",
                        command.usage(),
                        command.description()
                    ));
                }
                text.push_str(
                    "\nKeys: Tab switch screen · Ctrl+E expand groundedness detail · \
                     Ctrl+B dismiss banner · Ctrl+C quit",
                );
                self.state.transcript.push_assistant(text);
                self.state.scroll_to_bottom();
            }
            SlashCommand::Quit => self.quit(),
            SlashCommand::Clear => {
                let old_session = self.state.clear_chat();
                self.dispatch_clear_session(old_session);
                self.state.transcript.push_assistant("Started a new session.");
            }
            SlashCommand::Upload => {
                if let Some(path) = arg {
                    self.dispatch_upload(path);
                }
            }
            SlashCommand::Documents => {
                self.state.set_screen(Screen::Documents);
                self.dispatch_documents_refresh();
            }
            SlashCommand::Dashboard => self.state.set_screen(Screen::Dashboard),
        }
    }

    // Spawned API calls. Each task reports back over the event channel and
    // is folded into state on the loop thread.

    fn dispatch_chat(&self, query: String) {
        let client = self.client.clone();
        let sender = self.events.sender();
        let session_id = self.state.session.id().to_string();
        let epoch = self.state.chat_epoch();

        tokio::spawn(async move {
            let result = client.chat(&query, &session_id).await;
            let _ = sender.send(AppEvent::ChatFinished { epoch, result });
        });
    }

    fn dispatch_upload(&mut self, path: String) {
        let filename = Path::new(&path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(path.as_str())
            .to_string();

        // Extension check happens before any I/O; a rejection never spawns
        let Some(upload_id) = self.state.begin_upload(&filename) else {
            return;
        };

        let client = self.client.clone();
        let sender = self.events.sender();

        tokio::spawn(async move {
            let result = match tokio::fs::read(&path).await {
                Ok(bytes) => client
                    .upload_document(&filename, bytes)
                    .await
                    .map_err(|error| AppState::describe_api_error(&error)),
                Err(error) => Err(format!("could not read {path}: {error}")),
            };
            let _ = sender.send(AppEvent::UploadFinished { upload_id, result });
        });
    }

    fn dispatch_documents_refresh(&self) {
        let client = self.client.clone();
        let sender = self.events.sender();

        tokio::spawn(async move {
            let result = client.list_documents().await;
            let _ = sender.send(AppEvent::DocumentsLoaded(result));
        });
    }

    fn dispatch_delete(&self, document_id: String) {
        let client = self.client.clone();
        let sender = self.events.sender();

        tokio::spawn(async move {
            let result = client.delete_document(&document_id).await;
            let _ = sender.send(AppEvent::DocumentDeleted {
                document_id,
                result,
            });
        });
    }

    fn dispatch_bulk_delete(&self, document_ids: Vec<String>) {
        let client = self.client.clone();
        let sender = self.events.sender();

        tokio::spawn(async move {
            let result = client.bulk_delete(&document_ids).await;
            let _ = sender.send(AppEvent::BulkDeleteFinished(result));
        });
    }

    fn dispatch_health_check(&self) {
        let client = self.client.clone();
        let sender = self.events.sender();

        tokio::spawn(async move {
            let health = client.health_check().await.ok();
            let _ = sender.send(AppEvent::HealthChecked(health));
        });
    }

    /// Best-effort: a failed session clear is logged and otherwise ignored
    fn dispatch_clear_session(&self, session_id: String) {
        let client = self.client.clone();

        tokio::spawn(async move {
            if let Err(error) = client.clear_session(&session_id).await {
                tracing::debug!(%session_id, %error, "session clear failed");
            }
        });
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
