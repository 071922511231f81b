//! Main layout orchestration.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{App, AppState};

use super::{variables, widgets};

pub(crate) const TITLE: &str = "Environment Variables Tester";
const SUBTITLE: &str = "Test and view your environment variables safely";

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(6),    // Body
            Constraint::Length(3), // Footer (keybinds)
        ])
        .split(size);

    render_header(frame, main_chunks[0], app);
    variables::render(frame, main_chunks[1], app);
    render_footer(frame, main_chunks[2]);

    widgets::render_toasts(frame, main_chunks[1], &app.toasts);

    if app.state == AppState::Help {
        widgets::render_help_overlay(frame);
    }
}

/// Title, subtitle and the refresh control.
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = Span::styled(
        format!(" {} ", TITLE),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let refresh = if app.is_loading() {
        vec![Span::styled(
            "Loading... ",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        )]
    } else {
        vec![
            Span::styled("[R] ", Style::default().fg(Color::Yellow)),
            Span::raw("Refresh Variables "),
        ]
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let title_len = title.content.chars().count();
    let refresh_len: usize = refresh.iter().map(|s| s.content.chars().count()).sum();
    let padding = inner_width.saturating_sub(title_len + refresh_len);

    let mut first = vec![title, Span::raw(" ".repeat(padding))];
    first.extend(refresh);

    let status = match app.last_refresh {
        Some(time) => format!(" Last refresh: {} ", time.format("%H:%M:%S")),
        None => String::new(),
    };
    let second = Line::from(vec![
        Span::styled(format!(" {}", SUBTITLE), Style::default().fg(Color::Gray)),
        Span::styled(status, Style::default().fg(Color::DarkGray)),
    ]);

    let header = Paragraph::new(vec![Line::from(first), second]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(header, area);
}

/// Render the footer with keyboard shortcuts.
fn render_footer(frame: &mut Frame, area: Rect) {
    let keybinds = vec![
        Span::styled("[R]", Style::default().fg(Color::Yellow)),
        Span::raw(" Refresh  "),
        Span::styled("[↑↓/jk]", Style::default().fg(Color::Yellow)),
        Span::raw(" Scroll  "),
        Span::styled("[?]", Style::default().fg(Color::Yellow)),
        Span::raw(" Help  "),
        Span::styled("[Q]", Style::default().fg(Color::Yellow)),
        Span::raw(" Quit"),
    ];

    let footer = Paragraph::new(Line::from(keybinds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .centered();

    frame.render_widget(footer, area);
}
