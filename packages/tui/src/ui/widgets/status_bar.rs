use crate::input::InputMode;
use crate::state::{AppState, ConnectionStatus, Screen};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};

/// Status bar widget that displays context-aware information
pub struct StatusBarWidget<'a> {
    state: &'a AppState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Get the current mode indicator text and style (only when meaningful)
    fn get_mode_info(&self) -> Option<(String, Style)> {
        match self.state.input_mode() {
            InputMode::Filter => Some((
                "FILTER".to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            InputMode::History => Some((
                "HISTORY".to_string(),
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            )),
            InputMode::Normal => None,
        }
    }

    /// Connectivity indicator derived from the last health probe
    fn get_connectivity(&self) -> (&'static str, Color) {
        match self.state.connection {
            ConnectionStatus::Connected => ("● connected", Color::Green),
            ConnectionStatus::Disconnected => ("● offline", Color::Red),
            ConnectionStatus::Unknown => ("● probing…", Color::DarkGray),
        }
    }

    /// Get navigation breadcrumb text with session and corpus context
    fn get_breadcrumb(&self) -> String {
        let mut parts = vec![format!(" {}", self.state.current_screen.title())];

        parts.push(format!("session {}", self.state.session.short_id()));

        match self.state.documents.len() {
            0 => {}
            1 => parts.push("1 document".to_string()),
            n => parts.push(format!("{n} documents")),
        }

        let in_flight = self.state.uploads.in_flight();
        if in_flight > 0 {
            parts.push(format!("uploading {in_flight}…"));
        }

        parts.join(" • ")
    }

    /// Get context-aware keyboard shortcuts
    fn get_shortcuts(&self) -> String {
        match (self.state.current_screen, self.state.input_mode()) {
            (Screen::Documents, InputMode::Filter) => {
                "Type to filter • Enter/Esc: Done".to_string()
            }
            (Screen::Documents, _) => {
                "↑↓: Navigate • Space: Select • a: All • d: Delete • x: Bulk • s: Sort • /: Filter • r: Refresh"
                    .to_string()
            }
            (Screen::Dashboard, _) => "r: Refresh • Tab: Navigate • q: Quit".to_string(),
            (Screen::Chat, InputMode::History) => "↑↓: Navigate • Enter: Send • Esc: Cancel".to_string(),
            (Screen::Chat, _) => {
                "Enter: Send • /: Commands • ↑↓: History/Scroll • Tab: Switch Screen".to_string()
            }
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mode_info = self.get_mode_info();
        let (connectivity, connectivity_color) = self.get_connectivity();
        let breadcrumb = self.get_breadcrumb();
        let shortcuts = self.get_shortcuts();

        let connectivity_width = connectivity.chars().count() as u16 + 2;

        let chunks = if let Some((ref mode_text, _)) = mode_info {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(mode_text.len() as u16 + 2),
                    Constraint::Length(connectivity_width),
                    Constraint::Min(20),
                    Constraint::Length(shortcuts.len() as u16),
                ])
                .split(area)
        } else {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(connectivity_width),
                    Constraint::Min(20),
                    Constraint::Length(shortcuts.len() as u16),
                ])
                .split(area)
        };

        let mut current_chunk = 0;

        if let Some((mode_text, mode_style)) = mode_info {
            let mode_paragraph = Paragraph::new(format!(" {} ", mode_text))
                .style(mode_style)
                .block(Block::default());
            mode_paragraph.render(chunks[current_chunk], buf);
            current_chunk += 1;
        }

        let connectivity_paragraph = Paragraph::new(format!(" {connectivity} "))
            .style(Style::default().fg(connectivity_color))
            .block(Block::default());
        connectivity_paragraph.render(chunks[current_chunk], buf);
        current_chunk += 1;

        let middle_paragraph = Paragraph::new(breadcrumb)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default());
        middle_paragraph.render(chunks[current_chunk], buf);
        current_chunk += 1;

        let shortcuts_paragraph = Paragraph::new(shortcuts)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default());
        shortcuts_paragraph.render(chunks[current_chunk], buf);
    }
}
