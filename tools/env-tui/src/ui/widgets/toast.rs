//! Toast stack, bottom-right of the body.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::domain::{ToastKind, ToastQueue};

const TOAST_WIDTH: u16 = 42;
// Title in the top border, one line of description
const TOAST_HEIGHT: u16 = 3;

/// Newest toast sits at the bottom; older ones stack upward.
pub fn render_toasts(frame: &mut Frame, area: Rect, toasts: &ToastQueue) {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.x + area.width - width;
    let mut bottom = area.y + area.height;

    for toast in toasts.iter() {
        if bottom < area.y + TOAST_HEIGHT {
            break;
        }
        let rect = Rect::new(x, bottom - TOAST_HEIGHT, width, TOAST_HEIGHT);
        bottom -= TOAST_HEIGHT;

        let color = match toast.kind {
            ToastKind::Success => Color::Green,
            ToastKind::Destructive => Color::Red,
        };

        let body = Paragraph::new(Line::raw(toast.description.as_str())).block(
                Block::default()
                    .title(format!(" {} ", toast.title))
                    .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );

        frame.render_widget(Clear, rect);
        frame.render_widget(body, rect);
    }
}
