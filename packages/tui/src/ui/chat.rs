use crate::chat::grounding::{rating_label, GroundingTier};
use crate::state::AppState;
use crate::ui::widgets::{InputWidget, TranscriptWidget};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Render the chat screen: transcript, optional banner line, input
pub fn render_with_area(frame: &mut Frame, state: &AppState, area: Rect) {
    let constraints = if state.banner().is_some() {
        vec![
            Constraint::Min(5),    // Transcript
            Constraint::Length(1), // Low-confidence banner
            Constraint::Length(3), // Input
        ]
    } else {
        vec![Constraint::Min(5), Constraint::Length(3)]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let transcript = TranscriptWidget::new(state).scroll_offset(state.scroll_offset());
    frame.render_widget(transcript, chunks[0]);

    if let Some(banner) = state.banner() {
        let tier = GroundingTier::from_score(banner.score);
        let text = format!(
            " ⚠ Low-confidence answer: groundedness {:.0}/100, {} risk. Verify against the source documents. (Ctrl+B to dismiss)",
            banner.score,
            rating_label(banner.rating)
        );
        let line = Paragraph::new(text).style(
            Style::default()
                .fg(Color::Black)
                .bg(tier.color())
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(line, chunks[1]);
    }

    let input = InputWidget::new(state);
    frame.render_widget(input, chunks[chunks.len() - 1]);
}
