use crate::input::InputMode;
use crate::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

/// Render the documents screen
pub fn render_with_area(frame: &mut Frame, state: &AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Document list
            Constraint::Length(1), // Notice / filter line
        ])
        .split(area);

    render_list(frame, state, chunks[0]);
    render_footer(frame, state, chunks[1]);
}

fn render_list(frame: &mut Frame, state: &AppState, area: Rect) {
    let filtered = state.documents.filtered();

    if filtered.is_empty() {
        let title = if state.documents.is_empty() {
            "Documents - none indexed yet"
        } else {
            "Documents - no matches for the current filter"
        };

        let help_text = if state.documents.is_empty() {
            "No documents indexed.\n\nUpload one from the chat screen with /upload <path>\n(PDF, DOCX and DOC files are supported.)"
        } else {
            "No filenames contain the filter text.\n\nPress Esc to clear the filter."
        };

        let block = Block::default()
            .title(title)
            .title_style(Style::default().fg(Color::Yellow))
            .borders(Borders::ALL);
        let paragraph = Paragraph::new(help_text)
            .block(block)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(paragraph, area);
        return;
    }

    let title = format!(
        "Documents ({}/{}) - sort: {} • {} selected",
        filtered.len(),
        state.documents.len(),
        state.documents.sort_key().label(),
        state.documents.selection_len(),
    );

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Green))
        .borders(Borders::ALL);

    let items: Vec<ListItem> = filtered
        .iter()
        .map(|document| {
            let marker = if state.documents.is_selected(&document.document_id) {
                "[x]"
            } else {
                "[ ]"
            };

            let lines = vec![
                Line::from(vec![
                    Span::styled(format!("{marker} "), Style::default().fg(Color::Yellow)),
                    Span::styled(
                        document.filename.clone(),
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![
                    Span::raw("     "),
                    Span::styled(
                        format!(
                            "{} pages · {} chunks · uploaded {}",
                            document.num_pages, document.num_chunks, document.upload_time
                        ),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
            ];

            ListItem::new(Text::from(lines))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(state.documents.cursor().min(filtered.len() - 1)));

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_footer(frame: &mut Frame, state: &AppState, area: Rect) {
    let (text, style) = if let Some(notice) = state.documents.notice() {
        (format!(" {notice}"), Style::default().fg(Color::Red))
    } else if state.input_mode() == InputMode::Filter || !state.documents.filter().is_empty() {
        (
            format!(" filter: {}", state.documents.filter()),
            Style::default().fg(Color::Yellow),
        )
    } else {
        (String::new(), Style::default())
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}
