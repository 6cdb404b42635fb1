use crate::state::{AppState, ConnectionStatus};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Render the dashboard screen
pub fn render_with_area(frame: &mut Frame, state: &AppState, area: Rect) {
    let block = Block::default()
        .title("UW Companion Dashboard")
        .borders(Borders::ALL);

    let heading = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::Gray);

    let (connectivity, connectivity_color) = match state.connection {
        ConnectionStatus::Connected => ("connected", Color::Green),
        ConnectionStatus::Disconnected => ("offline (is the backend running?)", Color::Red),
        ConnectionStatus::Unknown => ("probing…", Color::DarkGray),
    };

    let mut lines = vec![
        Line::from(Span::styled("Backend", heading)),
        Line::from(vec![
            Span::styled("  Status: ", dim),
            Span::styled(connectivity, Style::default().fg(connectivity_color)),
        ]),
    ];

    if let Some(health) = &state.health {
        lines.push(Line::from(vec![
            Span::styled("  Stack:  ", dim),
            Span::raw(format!(
                "llm={} · embeddings={} · store={}",
                health.llm_backend.as_deref().unwrap_or("?"),
                health.embedding_backend.as_deref().unwrap_or("?"),
                health.vector_store_backend.as_deref().unwrap_or("?"),
            )),
        ]));
        let (key_state, key_color) = if health.gemini_configured {
            ("configured", Color::Green)
        } else {
            ("missing", Color::Red)
        };
        lines.push(Line::from(vec![
            Span::styled("  Gemini key: ", dim),
            Span::styled(key_state, Style::default().fg(key_color)),
        ]));
    }

    lines.extend([
        Line::from(""),
        Line::from(Span::styled("Session", heading)),
        Line::from(vec![
            Span::styled("  Id: ", dim),
            Span::raw(state.session.id().to_string()),
        ]),
        Line::from(vec![
            Span::styled("  Messages: ", dim),
            Span::raw(state.transcript.len().to_string()),
        ]),
        Line::from(vec![
            Span::styled("  Chat request in flight: ", dim),
            Span::raw(if state.is_awaiting_response() { "yes" } else { "no" }),
        ]),
        Line::from(""),
        Line::from(Span::styled("Corpus", heading)),
        Line::from(vec![
            Span::styled("  Documents: ", dim),
            Span::raw(state.documents.len().to_string()),
        ]),
        Line::from(vec![
            Span::styled("  Chunks: ", dim),
            Span::raw(state.documents.total_chunks().to_string()),
            Span::styled("   Pages: ", dim),
            Span::raw(state.documents.total_pages().to_string()),
        ]),
        Line::from(vec![
            Span::styled("  Uploads in flight: ", dim),
            Span::raw(state.uploads.in_flight().to_string()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "r: refresh • Tab: switch screen • q: quit",
            Style::default().fg(Color::DarkGray),
        )),
    ]);

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
