// About tab.
// Profile fields, headline stats, languages, experience timeline and achievements.

use ratatui::{prelude::*, widgets::*};

use super::widgets::{render_cards, render_empty, slot_style};
use crate::page::{FieldKey, Page};

/// Draw the About tab.
pub fn draw_about(frame: &mut Frame, page: &Page, area: Rect) {
    let has_stats = page.stats().is_some_and(|cards| !cards.is_empty());
    let has_languages = page.languages().is_some_and(|cards| !cards.is_empty());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if has_stats { 4 } else { 0 }),
            Constraint::Length(if has_languages { 4 } else { 0 }),
            Constraint::Min(1),
        ])
        .split(area);

    if let Some(cards) = page.stats() {
        render_cards(frame, chunks[0], cards);
    }
    if let Some(cards) = page.languages() {
        render_cards(frame, chunks[1], cards);
    }

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    draw_profile(frame, page, body[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(body[1]);

    draw_timeline(frame, page, right[0]);
    draw_achievements(frame, page, right[1]);
}

fn draw_profile(frame: &mut Frame, page: &Page, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Profile ");

    let mut lines: Vec<Line> = page
        .fields()
        .filter(|(key, slot)| *key != FieldKey::Avatar && !slot.is_blank())
        .map(|(key, slot)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<10} ", key.label()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(slot.text.clone(), slot_style(slot)),
            ])
        })
        .collect();

    if let Some(slot) = page.top_language().filter(|slot| !slot.is_blank()) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<10} ", "Top lang"),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(slot.text.clone(), slot_style(slot)),
        ]));
    }

    if let Some(error) = page.error() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("❌ {}", error),
            Style::default().fg(Color::Red),
        )));
    }

    if lines.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        render_empty(frame, inner, "Nothing loaded yet");
        return;
    }

    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn draw_timeline(frame: &mut Frame, page: &Page, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Experience ");
    let entries = page.timeline().map(|t| t.entries.as_slice()).unwrap_or(&[]);

    if entries.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        render_empty(frame, inner, "No timeline");
        return;
    }

    let items: Vec<ListItem> = entries
        .iter()
        .map(|event| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled("● ", Style::default().fg(Color::Cyan)),
                    Span::styled(
                        event.title.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", event.date_label),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                Line::from(Span::raw(format!("  {}", event.detail))),
            ])
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn draw_achievements(frame: &mut Frame, page: &Page, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Achievements ");
    let achievements = page.achievements().unwrap_or(&[]);

    if achievements.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        render_empty(frame, inner, "No achievements yet");
        return;
    }

    let items: Vec<ListItem> = achievements
        .iter()
        .map(|a| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", a.icon)),
                Span::styled(a.title.clone(), Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!("  {}", a.desc),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
