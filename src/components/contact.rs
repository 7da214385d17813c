//! Contact section - the form and the "Connect With Me" links
//!
//! Owns focus and edit mode only; field values live in the App's
//! `ContactForm` and change through Actions.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::visible_tail;
use crate::model::content::{LinkTarget, PersonalInfo};
use crate::model::{ContactForm, FormField};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const INTRO: &str = "Have a question or want to work together? Feel free to reach out!";
pub const INVALID_EMAIL_HINT: &str = "Please enter a valid email address";

/// What the keyboard currently points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFocus {
    Field(FormField),
    Send,
}

impl ContactFocus {
    fn order() -> [ContactFocus; 4] {
        [
            ContactFocus::Field(FormField::Name),
            ContactFocus::Field(FormField::Email),
            ContactFocus::Field(FormField::Message),
            ContactFocus::Send,
        ]
    }

    fn position(&self) -> usize {
        Self::order().iter().position(|f| f == self).unwrap_or(0)
    }

    fn next(&self) -> ContactFocus {
        let order = Self::order();
        order[(self.position() + 1).min(order.len() - 1)]
    }

    fn previous(&self) -> ContactFocus {
        Self::order()[self.position().saturating_sub(1)]
    }
}

pub struct ContactComponent {
    pub focus: ContactFocus,
    /// Keys go into the focused field
    pub editing: bool,
    /// Inline message under the form (missing fields)
    pub hint: Option<String>,
}

impl Default for ContactComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactComponent {
    pub fn new() -> Self {
        Self {
            focus: ContactFocus::Field(FormField::Name),
            editing: false,
            hint: None,
        }
    }

    pub fn focused_field(&self) -> Option<FormField> {
        match self.focus {
            ContactFocus::Field(field) => Some(field),
            ContactFocus::Send => None,
        }
    }

    pub fn start_editing(&mut self) {
        if self.focused_field().is_some() {
            self.editing = true;
        }
    }

    pub fn stop_editing(&mut self) {
        self.editing = false;
    }

    /// Move focus forward; leaving the fields ends edit mode
    fn focus_next(&mut self) {
        self.focus = self.focus.next();
        if self.focus == ContactFocus::Send {
            self.editing = false;
        }
    }

    fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Point the user at the fields that still need a value
    pub fn show_missing(&mut self, missing: &[FormField]) {
        let Some(first) = missing.first() else {
            self.hint = None;
            return;
        };
        let names: Vec<&str> = missing.iter().map(|f| field_label(*f)).collect();
        self.hint = Some(format!("Please fill out: {}", names.join(", ")));
        self.focus = ContactFocus::Field(*first);
        self.editing = true;
    }

    /// Send the user back to a malformed email address
    pub fn show_invalid_email(&mut self) {
        self.hint = Some(INVALID_EMAIL_HINT.to_string());
        self.focus = ContactFocus::Field(FormField::Email);
        self.editing = true;
    }

    /// Reset focus after a successful send
    pub fn reset(&mut self) {
        self.focus = ContactFocus::Field(FormField::Name);
        self.editing = false;
        self.hint = None;
    }

    fn handle_editing_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => Some(Action::StopEditing),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::SubmitContact)
            }
            KeyCode::Enter if self.focused_field().is_some_and(|f| f.is_multiline()) => {
                Some(Action::FormInput('\n'))
            }
            KeyCode::Enter | KeyCode::Tab => {
                self.focus_next();
                None
            }
            KeyCode::BackTab => {
                self.focus_previous();
                None
            }
            KeyCode::Backspace => Some(Action::FormBackspace),
            KeyCode::Char(c) => Some(Action::FormInput(c)),
            _ => None,
        }
    }

    fn handle_navigation_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::SubmitContact)
            }
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Enter if self.focus == ContactFocus::Send => Some(Action::SubmitContact),
            KeyCode::Enter | KeyCode::Char('i') => Some(Action::StartEditing),
            KeyCode::Char('e') => Some(Action::OpenLink(LinkTarget::Email)),
            KeyCode::Char('l') => Some(Action::OpenLink(LinkTarget::LinkedIn)),
            KeyCode::Char('g') => Some(Action::OpenLink(LinkTarget::GitHub)),
            _ => None,
        }
    }

    pub fn draw_with_form(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        form: &ContactForm,
        info: &PersonalInfo,
    ) -> Result<()> {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(columns[0]);

        frame.render_widget(
            Paragraph::new(Span::styled(INTRO, Style::default().fg(Color::Gray)))
                .wrap(Wrap { trim: true }),
            rows[0],
        );

        for (field, slot) in FormField::all().into_iter().zip(rows[1..4].iter()) {
            self.draw_field(frame, *slot, field, form.field(field));
        }

        frame.render_widget(Paragraph::new(self.button_line(form)), rows[4]);

        if let Some(ref hint) = self.hint {
            frame.render_widget(
                Paragraph::new(Span::styled(hint.clone(), Style::default().fg(Color::Red))),
                rows[5],
            );
        }

        draw_connect_links(frame, columns[1], info);
        Ok(())
    }

    fn button_line(&self, form: &ContactForm) -> Line<'static> {
        let focused = self.focus == ContactFocus::Send;
        let (label, style) = if form.is_submitting() {
            ("Sending...", Style::default().fg(Color::Gray).bg(Color::DarkGray))
        } else if focused {
            (
                "Send Message",
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("Send Message", Style::default().fg(Color::Blue))
        };
        Line::from(vec![
            Span::styled(format!(" {} ", label), style),
            Span::styled("  Ctrl+s", Style::default().fg(Color::DarkGray)),
        ])
    }

    fn draw_field(&self, frame: &mut Frame, area: Rect, field: FormField, value: &str) {
        let focused = self.focus == ContactFocus::Field(field);
        let editing = focused && self.editing;
        let border = if editing {
            Color::Yellow
        } else if focused {
            Color::Blue
        } else {
            Color::DarkGray
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(format!(" {} ", field_label(field)));
        let inner = block.inner(area);

        if value.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    field.placeholder(),
                    Style::default().fg(Color::DarkGray),
                ))
                .block(block),
                area,
            );
            if editing {
                frame.set_cursor_position((inner.x, inner.y));
            }
            return;
        }

        if field.is_multiline() {
            let lines: Vec<&str> = value.split('\n').collect();
            let skip = lines.len().saturating_sub(inner.height.max(1) as usize);
            let shown: Vec<Line> = lines[skip..]
                .iter()
                .map(|l| Line::from(visible_tail(l, inner.width.saturating_sub(1)).0.to_string()))
                .collect();
            let row = (shown.len() as u16).saturating_sub(1);
            let col = lines
                .last()
                .map(|l| visible_tail(l, inner.width.saturating_sub(1)).1)
                .unwrap_or(0);
            frame.render_widget(Paragraph::new(shown).block(block), area);
            if editing {
                frame.set_cursor_position((inner.x + col, inner.y + row));
            }
        } else {
            let (tail, col) = visible_tail(value, inner.width.saturating_sub(1));
            frame.render_widget(Paragraph::new(tail.to_string()).block(block), area);
            if editing {
                frame.set_cursor_position((inner.x + col, inner.y));
            }
        }
    }
}

fn field_label(field: FormField) -> &'static str {
    match field {
        FormField::Name => "Name",
        FormField::Email => "Email",
        FormField::Message => "Message",
    }
}

fn draw_connect_links(frame: &mut Frame, area: Rect, info: &PersonalInfo) {
    let entry = |key: &'static str, title: &'static str, detail: String| {
        vec![
            Line::from(vec![
                Span::styled(
                    format!(" {} ", key),
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Blue)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" {}", title),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                format!("    {}", detail),
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
        ]
    };

    let mut lines = Vec::new();
    lines.extend(entry("e", "Email", info.email.clone()));
    lines.extend(entry("l", "LinkedIn", "Connect with me".to_string()));
    lines.extend(entry("g", "GitHub", "View my work".to_string()));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Connect With Me ")
            .title_style(
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
    );
    frame.render_widget(paragraph, area);
}

impl Component for ContactComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = if self.editing {
            self.handle_editing_key(key)
        } else {
            self.handle_navigation_key(key)
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::NextItem => self.focus_next(),
            Action::PrevItem => self.focus_previous(),
            Action::StartEditing => self.start_editing(),
            Action::StopEditing => self.stop_editing(),
            Action::FormInput(_) | Action::FormBackspace => self.hint = None,
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Needs the form values, so we use draw_with_form
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PortfolioContent;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_only_in_edit_mode() {
        let mut contact = ContactComponent::new();
        assert_eq!(
            contact.handle_key_event(key(KeyCode::Char('e'))).unwrap(),
            Some(Action::OpenLink(LinkTarget::Email))
        );

        contact.update(Action::StartEditing).unwrap();
        assert_eq!(
            contact.handle_key_event(key(KeyCode::Char('e'))).unwrap(),
            Some(Action::FormInput('e'))
        );
        assert_eq!(
            contact.handle_key_event(key(KeyCode::Esc)).unwrap(),
            Some(Action::StopEditing)
        );
    }

    #[test]
    fn test_enter_moves_between_fields_and_newlines_message() {
        let mut contact = ContactComponent::new();
        contact.start_editing();

        assert_eq!(contact.handle_key_event(key(KeyCode::Enter)).unwrap(), None);
        assert_eq!(contact.focused_field(), Some(FormField::Email));
        contact.handle_key_event(key(KeyCode::Tab)).unwrap();
        assert_eq!(contact.focused_field(), Some(FormField::Message));
        assert_eq!(
            contact.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::FormInput('\n'))
        );

        contact.handle_key_event(key(KeyCode::Tab)).unwrap();
        assert_eq!(contact.focus, ContactFocus::Send);
        assert!(!contact.editing);
        assert_eq!(
            contact.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::SubmitContact)
        );
    }

    #[test]
    fn test_ctrl_s_submits_from_anywhere() {
        let mut contact = ContactComponent::new();
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(contact.handle_key_event(ctrl_s).unwrap(), Some(Action::SubmitContact));
        contact.start_editing();
        assert_eq!(contact.handle_key_event(ctrl_s).unwrap(), Some(Action::SubmitContact));
    }

    #[test]
    fn test_show_missing_focuses_first_missing_field() {
        let mut contact = ContactComponent::new();
        contact.focus = ContactFocus::Send;
        contact.show_missing(&[FormField::Email, FormField::Message]);

        assert_eq!(contact.focused_field(), Some(FormField::Email));
        assert!(contact.editing);
        assert_eq!(contact.hint.as_deref(), Some("Please fill out: Email, Message"));

        contact.update(Action::FormInput('a')).unwrap();
        assert!(contact.hint.is_none());
    }

    fn render(contact: &mut ContactComponent, form: &ContactForm) -> String {
        let info = PortfolioContent::sample().personal_info;
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal
            .draw(|frame| {
                contact
                    .draw_with_form(frame, frame.area(), form, &info)
                    .unwrap();
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_button_label_follows_submitting_flag() {
        let mut contact = ContactComponent::new();
        let mut form = ContactForm::new();
        form.update_field(FormField::Name, "A");

        let idle = render(&mut contact, &form);
        assert!(idle.contains("Send Message"));
        assert!(idle.contains("Your Email"));

        form.begin_submit();
        let busy = render(&mut contact, &form);
        assert!(busy.contains("Sending..."));
        assert!(!busy.contains("Send Message"));
    }
}
