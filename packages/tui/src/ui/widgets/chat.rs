use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use uwc_client::types::{ActionCategory, ActionPriority};

use crate::chat::grounding::{GroundingFactor, GroundingTier};
use crate::chat::{Message, MessageRole};
use crate::input::InputMode;
use crate::state::AppState;

/// Widget displaying the chat transcript with expandable groundedness detail
pub struct TranscriptWidget<'a> {
    state: &'a AppState,
    scroll_offset: usize,
}

impl<'a> TranscriptWidget<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            state,
            scroll_offset: 0,
        }
    }

    /// Set the scroll offset (lines up from the bottom)
    pub fn scroll_offset(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }

    /// Format a message for display
    fn format_message<'b>(&self, message: &'b Message) -> Vec<Line<'b>> {
        let mut lines = Vec::new();

        let author_style = match message.role {
            MessageRole::User => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            MessageRole::Assistant => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        };

        lines.push(Line::from(vec![
            Span::styled(message.role_label(), author_style),
            Span::styled(
                format!(" [{}]", message.timestamp.format("%H:%M")),
                Style::default().fg(Color::DarkGray),
            ),
        ]));

        for content_line in message.content.lines() {
            if content_line.trim().is_empty() {
                lines.push(Line::from(""));
            } else {
                lines.push(Line::from(Span::raw(content_line)));
            }
        }

        if message.has_detail() {
            if self.state.is_expanded(message.id) {
                lines.extend(Self::format_detail(message));
            } else {
                lines.push(Line::from(Span::styled(
                    "▸ groundedness detail available (Ctrl+E)",
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )));
            }
        }

        // Spacing between messages
        lines.push(Line::from(""));

        lines
    }

    /// Expanded report, sources and actions under an assistant message
    fn format_detail(message: &Message) -> Vec<Line<'_>> {
        let mut lines = Vec::new();
        let dim = Style::default().fg(Color::Gray);

        if let Some(report) = &message.report {
            let tier = GroundingTier::from_score(report.overall_score);
            lines.push(Line::from(Span::styled(
                format!(
                    "Groundedness {:.0}/100 · {}",
                    report.overall_score,
                    tier.label()
                ),
                Style::default().fg(tier.color()).add_modifier(Modifier::BOLD),
            )));

            for factor in GroundingFactor::ALL {
                let score = factor.score(report);
                let factor_tier = GroundingTier::from_score(score);
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {:<22} {:>3.0}  ", factor.name(), score),
                        Style::default().fg(factor_tier.color()),
                    ),
                    Span::styled(factor.explanation(factor_tier), dim),
                ]));
            }

            if !report.flagged_claims.is_empty() {
                lines.push(Line::from(Span::styled("Flagged claims:", dim)));
                for claim in &report.flagged_claims {
                    lines.push(Line::from(Span::styled(
                        format!("  • {claim}"),
                        Style::default().fg(Color::Red),
                    )));
                }
            }

            for sentence in &report.sentence_details {
                let (marker, color) = if sentence.is_grounded {
                    ("✓", Color::Green)
                } else {
                    ("✗", Color::Red)
                };
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {marker} {:>3.0} ", sentence.grounding_score),
                        Style::default().fg(color),
                    ),
                    Span::raw(sentence.sentence.as_str()),
                    Span::styled(format!(" [{}]", sentence.best_source), dim),
                ]));
            }
        }

        if !message.sources.is_empty() {
            lines.push(Line::from(Span::styled("Sources:", dim)));
            for (index, source) in message.sources.iter().enumerate() {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!(
                            "  [{}] {} p.{} ({:.2})  ",
                            index + 1,
                            source.source,
                            source.page,
                            source.similarity
                        ),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(source.text.as_str(), dim),
                ]));
            }
        }

        if !message.actions.is_empty() {
            lines.push(Line::from(Span::styled("Recommended actions:", dim)));
            for action in &message.actions {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!(
                            "  ! {} · {}: ",
                            priority_label(action.priority),
                            category_label(action.category)
                        ),
                        Style::default().fg(priority_color(action.priority)),
                    ),
                    Span::raw(action.action.as_str()),
                ]));
                if !action.details.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("      {} ({})", action.details, action.source_reference),
                        dim,
                    )));
                }
            }
        }

        lines
    }
}

fn priority_label(priority: ActionPriority) -> &'static str {
    match priority {
        ActionPriority::Critical => "critical",
        ActionPriority::High => "high",
        ActionPriority::Medium => "medium",
        ActionPriority::Low => "low",
    }
}

fn priority_color(priority: ActionPriority) -> Color {
    match priority {
        ActionPriority::Critical => Color::Red,
        ActionPriority::High => Color::LightRed,
        ActionPriority::Medium => Color::Yellow,
        ActionPriority::Low => Color::Gray,
    }
}

fn category_label(category: ActionCategory) -> &'static str {
    match category {
        ActionCategory::CoverageGap => "coverage gap",
        ActionCategory::RiskFlag => "risk flag",
        ActionCategory::Endorsement => "endorsement",
        ActionCategory::Compliance => "compliance",
        ActionCategory::Pricing => "pricing",
    }
}

impl<'a> Widget for TranscriptWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Conversation (↑/↓ scroll · Tab switch screen)")
            .border_style(Style::default().fg(Color::Gray));

        let inner = block.inner(area);

        let mut all_lines = Vec::new();
        for message in self.state.transcript.messages() {
            all_lines.extend(self.format_message(message));
        }

        // Transient typing placeholder, not a transcript entry
        if self.state.is_awaiting_response() {
            all_lines.push(Line::from(Span::styled(
                "Assistant is thinking…",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }

        // Bottom-anchored window: offset counts lines up from the bottom
        let height = inner.height as usize;
        let total = all_lines.len();
        let max_offset = total.saturating_sub(height);
        let offset = self.scroll_offset.min(max_offset);
        let end = total - offset;
        let start = end.saturating_sub(height);
        let visible: Vec<Line> = all_lines[start..end].to_vec();

        let paragraph = Paragraph::new(visible).wrap(Wrap { trim: false });

        block.render(area, buf);
        paragraph.render(inner, buf);
    }
}

/// Single-line chat input with cursor and history indicator
pub struct InputWidget<'a> {
    state: &'a AppState,
}

impl<'a> InputWidget<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for InputWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title, border_color) = match self.state.input_mode() {
            InputMode::History => {
                let title = match self.state.input_history.position() {
                    Some((current, total)) => format!("Input [History {current}/{total}]"),
                    None => "Input".to_string(),
                };
                (title, Color::Yellow)
            }
            _ if self.state.is_awaiting_response() => {
                ("Input (waiting for answer…)".to_string(), Color::DarkGray)
            }
            _ => ("Input".to_string(), Color::White),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border_color));

        let inner = block.inner(area);

        let buffer = &self.state.input_buffer;
        let (display_text, text_style) = if buffer.is_empty() {
            (
                "Ask about the uploaded documents… (/help for commands)",
                Style::default().fg(Color::DarkGray),
            )
        } else {
            (buffer.content(), Style::default().fg(Color::White))
        };

        let paragraph = Paragraph::new(display_text).style(text_style);

        block.render(area, buf);
        paragraph.render(inner, buf);

        // Cursor cell, reversed so the underlying character stays visible
        if inner.width > 0 && inner.height > 0 {
            let cursor_x = inner.x + buffer.cursor_display_column().min(inner.width - 1);
            let cell = &mut buf[(cursor_x, inner.y)];
            cell.set_style(cell.style().add_modifier(Modifier::REVERSED));
        }
    }
}
