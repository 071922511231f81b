//! Error banner and the variable list.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::App;

const EMPTY_VALUE: &str = "(empty)";

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let list_area = match &app.error_message {
        Some(message) => {
            let [banner, rest] =
                Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(area);
            render_error(frame, banner, message);
            rest
        }
        None => area,
    };

    render_list(frame, list_area, app);
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let banner = Paragraph::new(Line::from(vec![
        Span::styled("Error: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(message),
    ]))
    .style(Style::default().fg(Color::Red))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );

    frame.render_widget(banner, area);
}

fn render_list(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" Environment Variables ({}) ", app.count))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines: Vec<Line> = if app.is_loading() {
        vec![Line::styled(
            "Loading environment variables...",
            Style::default().fg(Color::DarkGray),
        )]
    } else if app.variables.is_empty() {
        vec![
            Line::raw(""),
            Line::styled(
                "No environment variables found",
                Style::default().fg(Color::Gray),
            ),
            Line::styled(
                "Add some environment variables to your .env file or deployment settings",
                Style::default().fg(Color::DarkGray),
            ),
        ]
    } else {
        app.variables
            .iter()
            .map(|(key, value)| {
                let value = if value.is_empty() {
                    Span::styled(EMPTY_VALUE, Style::default().fg(Color::DarkGray))
                } else {
                    Span::raw(value.as_str())
                };
                Line::from(vec![
                    Span::styled(
                        key.as_str(),
                        Style::default()
                            .fg(Color::Blue)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(": "),
                    value,
                ])
            })
            .collect()
    };

    let list = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));

    frame.render_widget(list, area);
}
