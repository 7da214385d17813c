//! About section - description, resume link, skill bars and feature cards

use crate::action::Action;
use crate::component::Component;
use crate::model::content::{AboutInfo, LinkTarget, Skill};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

/// Feature cards under the skills (title, description)
pub const FEATURE_CARDS: [(&str, &str); 3] = [
    (
        "Clean Code",
        "Writing maintainable, efficient, and well-documented code following best practices.",
    ),
    (
        "Modern Design",
        "Creating beautiful, intuitive interfaces with attention to detail and user experience.",
    ),
    (
        "Responsive",
        "Building applications that work seamlessly across all devices and screen sizes.",
    ),
];

#[derive(Default)]
pub struct AboutComponent;

impl AboutComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn draw_with_about(&mut self, frame: &mut Frame, area: Rect, about: &AboutInfo) -> Result<()> {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(6)])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);

        let description = Paragraph::new(vec![
            Line::from(about.description.clone()),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    " r ",
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Blue)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" Download Resume"),
            ]),
        ])
        .wrap(Wrap { trim: true })
        .block(section_block(" About Me "));
        frame.render_widget(description, columns[0]);

        draw_skills(frame, columns[1], &about.skills);
        draw_feature_cards(frame, rows[1]);

        Ok(())
    }
}

fn section_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
}

/// One labelled gauge per skill, two rows each
fn draw_skills(frame: &mut Frame, area: Rect, skills: &[Skill]) {
    let block = section_block(" Skills & Technologies ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let constraints: Vec<Constraint> = skills
        .iter()
        .map(|_| Constraint::Length(2))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (skill, slot) in skills.iter().zip(slots.iter()) {
        if slot.height == 0 {
            break;
        }
        let gauge = Gauge::default()
            .block(Block::default().title(Line::from(vec![
                Span::styled(skill.name.clone(), Style::default().fg(Color::White)),
                Span::raw(" "),
                Span::styled(
                    format!("{}%", skill.percentage),
                    Style::default().fg(Color::Gray),
                ),
            ])))
            .gauge_style(Style::default().fg(Color::Blue).bg(Color::DarkGray))
            .percent(u16::from(skill.percentage.min(100)))
            .label("");
        frame.render_widget(gauge, *slot);
    }
}

fn draw_feature_cards(frame: &mut Frame, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for ((title, description), card) in FEATURE_CARDS.iter().zip(cards.iter()) {
        let paragraph = Paragraph::new(Span::styled(
            *description,
            Style::default().fg(Color::Gray),
        ))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .title(format!(" {} ", title))
                .title_style(Style::default().add_modifier(Modifier::BOLD)),
        );
        frame.render_widget(paragraph, *card);
    }
}

impl Component for AboutComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('r') => Some(Action::OpenLink(LinkTarget::Resume)),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Needs about info, so we use draw_with_about
        Ok(())
    }
}
