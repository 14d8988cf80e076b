// Projects tab.
// Selectable list of project cards with a detail pane for the highlighted one.

use ratatui::{prelude::*, widgets::*};

use super::widgets::{render_empty, render_error, render_loading};
use crate::error::LOAD_FAILED_MESSAGE;
use crate::page::ProjectCard;
use crate::state::{LoadStatus, Selection};

/// Draw the Projects tab.
pub fn draw_projects(
    frame: &mut Frame,
    cards: Option<&[ProjectCard]>,
    selection: &mut Selection,
    load: &LoadStatus,
    area: Rect,
) {
    let block = Block::default().borders(Borders::ALL).title(" Projects ");

    let cards = match cards {
        Some(cards) if !cards.is_empty() => cards,
        _ => {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            if *load == LoadStatus::Loading {
                render_loading(frame, inner, "Loading projects");
            } else if matches!(load, LoadStatus::Failed { .. }) {
                render_error(frame, inner, LOAD_FAILED_MESSAGE);
            } else {
                render_empty(frame, inner, "No projects");
            }
            return;
        }
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let items: Vec<ListItem> = cards
        .iter()
        .map(|card| {
            let mut spans = vec![
                Span::raw(format!("{} ", card.icon)),
                Span::styled(card.title.clone(), Style::default().fg(Color::White)),
                Span::styled(
                    format!("  ★ {}", card.stars),
                    Style::default().fg(Color::Yellow),
                ),
            ];
            if card.recent {
                spans.push(Span::styled(" new", Style::default().fg(Color::Green)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list_widget = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, chunks[0], &mut selection.list_state);

    let selected = selection.selected().and_then(|i| cards.get(i));
    draw_detail(frame, selected, chunks[1]);
}

fn draw_detail(frame: &mut Frame, card: Option<&ProjectCard>, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Details ");
    let Some(card) = card else {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        render_empty(frame, inner, "Select a project");
        return;
    };

    let dim = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(Span::styled(
            card.title.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(card.name.clone(), dim)),
        Line::from(""),
        Line::from(card.description.clone()),
        Line::from(""),
        Line::from(vec![
            Span::styled("Language  ", dim),
            Span::raw(format!("{} {}", card.icon, card.language)),
        ]),
        Line::from(vec![
            Span::styled("Category  ", dim),
            Span::raw(card.category),
        ]),
        Line::from(vec![
            Span::styled("Stars     ", dim),
            Span::raw(card.stars.to_string()),
        ]),
        Line::from(vec![Span::styled("Year      ", dim), Span::raw(card.year.clone())]),
        Line::from(vec![
            Span::styled("Source    ", dim),
            Span::raw(card.source_url.clone()),
        ]),
    ];
    if let Some(homepage) = &card.homepage {
        lines.push(Line::from(vec![
            Span::styled("Live demo ", dim),
            Span::raw(homepage.clone()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "↵ open source  h open live demo",
        dim,
    )));

    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}
