//! Quit confirmation dialog component

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Quit confirmation dialog
///
/// Warns when a message is still being sent, since quitting drops it.
#[derive(Default)]
pub struct QuitDialog {
    pub submission_pending: bool,
}

impl Component for QuitDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Action::ConfirmModal),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc | KeyCode::Char('q') => {
                Some(Action::CloseModal)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let height = if self.submission_pending { 8 } else { 7 };
        let popup_area = centered_popup(area, 44, height);

        frame.render_widget(Clear, popup_area);

        let mut content = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Leave the portfolio?",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        if self.submission_pending {
            content.push(Line::from(Span::styled(
                "A message is still being sent",
                Style::default().fg(Color::Red),
            )));
        }
        content.push(Line::from(""));
        content.push(Line::from(vec![
            Span::styled(
                " y ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Quit  "),
            Span::styled(
                " n/Esc ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw("Stay"),
        ]));

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue))
                    .title(" Quit ")
                    .title_style(
                        Style::default()
                            .fg(Color::Blue)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_quit_keys() {
        let mut dialog = QuitDialog::default();
        let press = |d: &mut QuitDialog, code| {
            d.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
                .unwrap()
        };
        assert_eq!(press(&mut dialog, KeyCode::Char('y')), Some(Action::ConfirmModal));
        assert_eq!(press(&mut dialog, KeyCode::Esc), Some(Action::CloseModal));
        assert_eq!(press(&mut dialog, KeyCode::Char('x')), None);
    }
}
