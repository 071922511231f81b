//! Help overlay widget.

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render a centered help overlay.
pub fn render_help_overlay(frame: &mut Frame) {
    let popup_area = centered_rect(70, 80, frame.area());

    frame.render_widget(Clear, popup_area);

    let heading = Style::default().add_modifier(Modifier::BOLD);
    let key = Style::default().fg(Color::Yellow);
    let code = Style::default().fg(Color::Green);

    let help_text = vec![
        Line::styled(
            "How to add environment variables",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::styled("Local development", heading),
        Line::raw("  Create a .env.local or .env file next to env-api:"),
        Line::styled("    NEXT_PUBLIC_SITE_NAME=My App", code),
        Line::styled("    NEXT_PUBLIC_API_URL=https://api.example.com", code),
        Line::raw(""),
        Line::styled("Deployment", heading),
        Line::raw("  Set variables in your platform's environment settings"),
        Line::raw("  and restart the service."),
        Line::raw(""),
        Line::styled("Public prefix", heading),
        Line::from(vec![
            Span::raw("  Only names starting with "),
            Span::styled("NEXT_PUBLIC_", code),
            Span::raw(" or on the allow-list are shown"),
        ]),
        Line::raw("  unless the server runs with --policy unfiltered."),
        Line::raw(""),
        Line::styled("Keys", heading),
        Line::from(vec![
            Span::styled("  R      ", key),
            Span::raw("Refresh variables"),
        ]),
        Line::from(vec![
            Span::styled("  ↑/↓ j/k", key),
            Span::raw(" Scroll"),
        ]),
        Line::from(vec![
            Span::styled("  Q/Esc  ", key),
            Span::raw("Quit"),
        ]),
        Line::from(vec![
            Span::styled("  ?      ", key),
            Span::raw("Toggle this help"),
        ]),
        Line::raw(""),
        Line::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(help_text).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Help ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(paragraph, popup_area);
}

/// Create a centered rectangle.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
