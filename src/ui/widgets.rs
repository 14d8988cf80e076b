// Shared widget helpers.
// Placeholder messages and stat card rows used by several panels.

use ratatui::{prelude::*, widgets::*};

use crate::page::{StatCard, TextSlot};

/// Render a loading indicator.
pub fn render_loading(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(format!("⏳ {}...", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(text, area);
}

/// Render an error message.
pub fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let text = Paragraph::new(format!("❌ {}", error))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red));
    frame.render_widget(text, area);
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

/// Style for a text slot; fallbacks are dimmed.
pub fn slot_style(slot: &TextSlot) -> Style {
    if slot.empty {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    }
}

/// Render a row of stat cards side by side.
pub fn render_cards(frame: &mut Frame, area: Rect, cards: &[StatCard]) {
    if cards.is_empty() {
        return;
    }
    let constraints = vec![Constraint::Ratio(1, cards.len() as u32); cards.len()];
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (card, chunk) in cards.iter().zip(chunks.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                card.value.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                card.sub.clone(),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let widget = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(format!(" {} ", card.label)),
            );
        frame.render_widget(widget, *chunk);
    }
}
