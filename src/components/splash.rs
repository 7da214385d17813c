//! Splash screen component
//!
//! Shows the owner's name and title briefly before the page appears.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

pub struct SplashComponent {
    /// When the splash screen was shown
    start_time: Option<Instant>,
    /// Duration to show splash before auto-advancing
    duration: Duration,
    name: String,
    title: String,
}

impl SplashComponent {
    pub fn new(name: &str, title: &str, duration: Duration) -> Self {
        Self {
            start_time: None,
            duration,
            name: name.to_string(),
            title: title.to_string(),
        }
    }

    /// Check if splash duration has elapsed
    pub fn is_complete(&self) -> bool {
        self.start_time
            .map(|t| t.elapsed() >= self.duration)
            .unwrap_or(false)
    }
}

/// Card width in columns: the wider line plus padding, at least 32
fn card_width(name: &str, title: &str) -> u16 {
    let widest = name.width().max(title.width());
    u16::try_from(widest)
        .unwrap_or(u16::MAX)
        .saturating_add(12)
        .max(32)
}

impl Component for SplashComponent {
    fn init(&mut self) -> Result<()> {
        self.start_time = Some(Instant::now());
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Any key press skips the splash screen
        match key.code {
            KeyCode::Char('q') => Ok(Some(Action::ForceQuit)),
            _ => Ok(Some(Action::SplashComplete)),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick && self.is_complete() {
            return Ok(Some(Action::SplashComplete));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let card = centered_popup(area, card_width(&self.name, &self.title), 9);

        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("Hi, I'm ", Style::default().fg(Color::White)),
                Span::styled(
                    self.name.clone(),
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                self.title.clone(),
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "press any key",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Blue)),
        );
        frame.render_widget(paragraph, card);

        Ok(())
    }
}
