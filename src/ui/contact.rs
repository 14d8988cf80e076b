// Contact tab.
// Mail form inputs, the availability note and the social links.

use ratatui::{prelude::*, widgets::*};

use super::widgets::slot_style;
use crate::page::Page;
use crate::state::{ContactDraft, ContactField};

/// Draw the Contact tab.
pub fn draw_contact(frame: &mut Frame, page: &Page, draft: &ContactDraft, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Subject
            Constraint::Min(3),    // Message
            Constraint::Length(3), // Note
            Constraint::Length(6), // Links
        ])
        .split(area);

    let enabled = page.contact_form().is_some_and(|form| form.is_enabled());

    draw_input(frame, draft, ContactField::Subject, enabled, chunks[0]);
    draw_input(frame, draft, ContactField::Message, enabled, chunks[1]);

    let note = match page.contact_note() {
        Some(slot) if !slot.text.is_empty() => {
            Paragraph::new(Span::styled(slot.text.clone(), slot_style(slot)))
        }
        _ => match page.contact_form().and_then(|form| form.email()) {
            Some(email) if enabled => Paragraph::new(Span::styled(
                format!("e to write to {}, ↵ to send with your mail client", email),
                Style::default().fg(Color::DarkGray),
            )),
            _ => Paragraph::new(""),
        },
    };
    frame.render_widget(
        note.block(Block::default().borders(Borders::ALL).title(" Note ")),
        chunks[2],
    );

    let links: Vec<Line> = page
        .links()
        .map(|(key, slot)| {
            let (text, style) = match &slot.href {
                Some(href) => (href.clone(), Style::default().fg(Color::Cyan)),
                None => ("—".to_string(), Style::default().fg(Color::DarkGray)),
            };
            Line::from(vec![
                Span::styled(
                    format!("{:<8} ", key.label()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(text, style),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(links).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Links (g/t/w) "),
        ),
        chunks[3],
    );
}

fn draw_input(
    frame: &mut Frame,
    draft: &ContactDraft,
    field: ContactField,
    enabled: bool,
    area: Rect,
) {
    let (title, value) = match field {
        ContactField::Subject => (" Subject ", draft.subject.as_str()),
        ContactField::Message => (" Message ", draft.message.as_str()),
    };
    let focused = draft.editing && draft.focus == field;
    let border = if !enabled {
        Color::DarkGray
    } else if focused {
        Color::Yellow
    } else {
        Color::White
    };

    let mut spans = vec![Span::raw(value.to_string())];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
    }

    let widget = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(title),
        );
    frame.render_widget(widget, area);
}
