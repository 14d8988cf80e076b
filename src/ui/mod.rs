// UI module for rendering the TUI.
// Contains the tab bar, one panel per tab, the status bar and the help overlay.

mod about;
mod contact;
mod projects;
mod tabs;
mod widgets;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Tab};

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    tabs::draw_tabs(frame, app, chunks[0]);

    draw_content(frame, app, chunks[1]);

    draw_status_bar(frame, app, chunks[2]);

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Draw the main content area based on active tab.
fn draw_content(frame: &mut Frame, app: &mut App, area: Rect) {
    match app.active_tab {
        Tab::About => about::draw_about(frame, &app.page, area),
        Tab::Projects => projects::draw_projects(
            frame,
            app.page.projects(),
            &mut app.projects,
            &app.status.load,
            area,
        ),
        Tab::Contact => contact::draw_contact(frame, &app.page, &app.contact, area),
    }
}

fn status_color(name: &str) -> Color {
    match name {
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "red" => Color::Red,
        _ => Color::DarkGray,
    }
}

/// Draw the status bar with load status, keybinding hints and rate limit.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, color) = app.status.display();

    let mut spans = vec![Span::styled(
        format!(" {} ", status_text),
        Style::default().fg(status_color(color)),
    )];

    if let Some(flash) = &app.flash {
        spans.push(Span::styled(
            format!(" {} ", flash),
            Style::default().fg(Color::Cyan),
        ));
    } else if app.contact.editing {
        spans.extend([
            Span::raw(" Tab "),
            Span::styled("Field", Style::default().fg(Color::DarkGray)),
            Span::raw("  ↵ "),
            Span::styled("Send", Style::default().fg(Color::DarkGray)),
            Span::raw("  Esc "),
            Span::styled("Stop editing", Style::default().fg(Color::DarkGray)),
        ]);
    } else {
        spans.extend([
            Span::raw(" Tab "),
            Span::styled("Switch", Style::default().fg(Color::DarkGray)),
            Span::raw("  r "),
            Span::styled("Refresh", Style::default().fg(Color::DarkGray)),
            Span::raw("  ? "),
            Span::styled("Help", Style::default().fg(Color::DarkGray)),
            Span::raw("  q "),
            Span::styled("Quit", Style::default().fg(Color::DarkGray)),
        ]);
    }

    // Add rate limit info on the right once the API has reported it
    let rate = &app.status.rate_limit;
    if rate.is_known() {
        let rate_color = if rate.remaining < 10 {
            Color::Red
        } else if rate.remaining < 30 {
            Color::Yellow
        } else {
            Color::DarkGray
        };
        spans.push(Span::styled(
            format!("  API: {}/{}", rate.remaining, rate.limit),
            Style::default().fg(rate_color),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn help_line(keys: &str, action: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<14}", keys), Style::default().fg(Color::Cyan)),
        Span::raw(action.to_string()),
    ])
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    let popup_width = 50;
    let popup_height = 20;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(
        popup_x,
        popup_y,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        help_line("Tab / 1 2 3", "Switch tabs"),
        help_line("↑/↓ or j/k", "Select project"),
        help_line("Enter", "Open project source"),
        help_line("h", "Open project live demo"),
        help_line("e", "Write a message (Contact)"),
        help_line("Tab (editing)", "Switch subject / message"),
        help_line("Enter (editing)", "Send with mail client"),
        help_line("Esc (editing)", "Stop editing"),
        help_line("g / t / w", "Open GitHub / Twitter / website"),
        help_line("r", "Refresh now"),
        help_line("?", "Show/hide this help"),
        help_line("q", "Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}
