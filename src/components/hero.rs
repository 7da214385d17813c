//! Hero banner - greeting, title and the two call-to-action buttons

use crate::action::Action;
use crate::component::Component;
use crate::model::content::PersonalInfo;
use crate::model::Section;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Call-to-action buttons in display order
const BUTTONS: [(&str, Section); 2] = [
    ("Get In Touch", Section::Contact),
    ("View Projects", Section::Projects),
];

#[derive(Default)]
pub struct HeroComponent {
    /// Index into `BUTTONS`
    pub focused_button: usize,
}

impl HeroComponent {
    pub fn new() -> Self {
        Self::default()
    }

    fn activate(&self) -> Action {
        Action::GoToSection(BUTTONS[self.focused_button].1)
    }

    pub fn draw_with_info(&mut self, frame: &mut Frame, area: Rect, info: &PersonalInfo) -> Result<()> {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        let mut lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "Hi, I'm ",
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    info.name.clone(),
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                info.title.clone(),
                Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                info.subtitle.clone(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
        ];

        let mut buttons = Vec::new();
        for (idx, (label, _)) in BUTTONS.iter().enumerate() {
            let style = if idx == self.focused_button {
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Blue)
            };
            buttons.push(Span::styled(format!(" {} ", label), style));
            buttons.push(Span::raw("  "));
        }
        lines.push(Line::from(buttons));

        let intro = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::NONE));
        frame.render_widget(intro, columns[0].inner(ratatui::layout::Margin {
            vertical: 1,
            horizontal: 2,
        }));

        let portrait = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                info.initials(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                info.profile_image.clone(),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .title(" Profile "),
        );
        frame.render_widget(portrait, columns[1].inner(ratatui::layout::Margin {
            vertical: 1,
            horizontal: 2,
        }));

        Ok(())
    }
}

impl Component for HeroComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.focused_button = self.focused_button.saturating_sub(1);
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.focused_button = (self.focused_button + 1).min(BUTTONS.len() - 1);
                None
            }
            KeyCode::Enter => Some(self.activate()),
            KeyCode::Char('g') => Some(Action::GoToSection(Section::Contact)),
            KeyCode::Char('v') => Some(Action::GoToSection(Section::Projects)),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Needs personal info, so we use draw_with_info
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_activates_focused_button() {
        let mut hero = HeroComponent::new();
        assert_eq!(
            hero.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::GoToSection(Section::Contact))
        );

        hero.handle_key_event(key(KeyCode::Right)).unwrap();
        hero.handle_key_event(key(KeyCode::Right)).unwrap();
        assert_eq!(hero.focused_button, 1);
        assert_eq!(
            hero.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::GoToSection(Section::Projects))
        );
    }
}
