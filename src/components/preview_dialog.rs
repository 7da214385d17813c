//! Project preview dialog
//!
//! Lists the preview images of the selected project. Shown whenever the
//! App's preview selection is present.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::centered_percent;
use crate::model::content::Project;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

#[derive(Default)]
pub struct PreviewDialog {
    pub scroll_offset: usize,
}

impl PreviewDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when a new project is selected
    pub fn reset(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn draw_with_project(&mut self, frame: &mut Frame, area: Rect, project: &Project) -> Result<()> {
        let dialog_area = centered_percent(area, 80, 80);
        frame.render_widget(Clear, dialog_area);

        let content = preview_lines(project);
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} - UI Preview ", project.title))
                    .title_style(
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    )
                    .title_bottom(Line::from(" Esc close  j/k scroll ").right_aligned())
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .scroll((self.scroll_offset as u16, 0));
        frame.render_widget(paragraph, dialog_area);

        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible_height)).position(self.scroll_offset);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
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

/// One caption and path per preview image, in order
fn preview_lines(project: &Project) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (idx, image) in project.previews().iter().enumerate() {
        lines.push(Line::from(Span::styled(
            format!("  {} preview {}", project.title, idx + 1),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("    {}", image),
            Style::default().fg(Color::Gray),
        )));
    }
    lines
}

impl Component for PreviewDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::ClosePreview),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Needs the selected project, so we use draw_with_project
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PortfolioContent;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_preview_lines_follow_image_order() {
        let project = PortfolioContent::sample().projects[0].clone();
        let lines = preview_lines(&project);
        assert_eq!(lines.len(), 16);
        assert_eq!(
            lines[0].spans[0].content,
            "  Star Hair Saloon Website preview 1"
        );
        assert_eq!(lines[15].spans[0].content, "    /images/salon8.PNG");
    }

    #[test]
    fn test_escape_closes() {
        let mut dialog = PreviewDialog::new();
        let action = dialog
            .handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::ClosePreview));
    }

    #[test]
    fn test_scroll_is_clamped_on_draw() {
        let project = PortfolioContent::sample().projects[0].clone();
        let mut dialog = PreviewDialog::new();
        dialog.scroll_offset = 500;

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| {
                dialog
                    .draw_with_project(frame, frame.area(), &project)
                    .unwrap();
            })
            .unwrap();

        // 16 content lines, 14 visible rows inside the borders
        assert_eq!(dialog.scroll_offset, 2);
    }
}
