pub mod chat;
pub mod dashboard;
pub mod documents;
pub mod widgets;

use crate::state::{AppState, Screen};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use widgets::StatusBarWidget;

/// Main UI rendering function
pub fn render(frame: &mut Frame, state: &AppState) {
    // Main content above a one-line status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Main content area (flexible)
            Constraint::Length(1), // Status bar (fixed height)
        ])
        .split(frame.area());

    match state.current_screen {
        Screen::Chat => chat::render_with_area(frame, state, chunks[0]),
        Screen::Documents => documents::render_with_area(frame, state, chunks[0]),
        Screen::Dashboard => dashboard::render_with_area(frame, state, chunks[0]),
    }

    let status_bar = StatusBarWidget::new(state);
    frame.render_widget(status_bar, chunks[1]);
}
