//! Toast overlay - renders active notifications in the top-right corner

use crate::components::layout::toast_slot;
use crate::model::NotificationCenter;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 4;

/// Draw toasts newest first until the column runs out of room
pub fn draw_toasts(frame: &mut Frame, area: Rect, notifications: &NotificationCenter) {
    if notifications.is_empty() {
        return;
    }

    for (idx, toast) in notifications.newest_first().enumerate() {
        let Some(slot) = toast_slot(area, idx as u16, TOAST_WIDTH, TOAST_HEIGHT) else {
            break;
        };

        let accent = if toast.notification.is_destructive() {
            Color::Red
        } else {
            Color::Green
        };

        let paragraph = Paragraph::new(vec![Line::from(Span::styled(
            toast.notification.description.clone(),
            Style::default().fg(Color::White),
        ))])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent))
                .title(Span::styled(
                    format!(" {} ", toast.notification.title),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ))
                .title_bottom(
                    Line::from(Span::styled(
                        format!(" {} ", toast.formatted_time()),
                        Style::default().fg(Color::DarkGray),
                    ))
                    .right_aligned(),
                ),
        );

        frame.render_widget(Clear, slot);
        frame.render_widget(paragraph, slot);
    }
}
