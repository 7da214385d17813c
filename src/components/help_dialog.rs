//! Help dialog component
//!
//! Lists the keyboard shortcuts, grouped by section.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::centered_percent;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// (group title, [(keys, description)])
const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("Tab / S-Tab", "Next / previous section"),
            ("1 2 3 4", "Home, About, Projects, Contact"),
            ("j/k ↓/↑", "Move within a section"),
            ("x", "Dismiss newest notification"),
        ],
    ),
    (
        "Home",
        &[
            ("h/l ←/→", "Choose a button"),
            ("Enter", "Activate button"),
            ("g", "Get In Touch"),
            ("v", "View Projects"),
        ],
    ),
    ("About", &[("r", "Download resume")]),
    (
        "Projects",
        &[
            ("d / Enter", "Demo: open the UI preview"),
            ("c", "Code: open the source repository"),
            ("Esc / q", "Close the preview"),
        ],
    ),
    (
        "Contact",
        &[
            ("i / Enter", "Edit the focused field"),
            ("Esc", "Stop editing"),
            ("Tab / Enter", "Next field while editing"),
            ("Ctrl+s", "Send message"),
            ("e / l / g", "Email, LinkedIn, GitHub"),
        ],
    ),
    (
        "General",
        &[("?", "Show this help"), ("q", "Quit")],
    ),
];

#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let dialog_area = centered_percent(area, 70, 80);
        frame.render_widget(Clear, dialog_area);

        let content = build_help_content();
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        let max_scroll = total.saturating_sub(visible_height);
        self.scroll_offset = self.scroll_offset.min(max_scroll);

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .scroll((self.scroll_offset as u16, 0));
        frame.render_widget(paragraph, dialog_area);

        if total > visible_height {
            let mut scrollbar_state = ScrollbarState::new(max_scroll).position(self.scroll_offset);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                dialog_area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (group, shortcuts) in SHORTCUTS {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", group),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        for (keys, description) in shortcuts.iter() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("    {:14}", keys),
                    Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                ),
                Span::raw(*description),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}
