//! Page component - header tabs, the active section, footer and help bar
//!
//! Owns which section is shown and routes keys to that section's component.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::calculate_page_layout;
use crate::components::{AboutComponent, ContactComponent, HeroComponent, ProjectsComponent};
use crate::model::{ContactForm, PortfolioContent, Section};
use anyhow::Result;
use chrono::{Datelike, Local};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Data the page needs to draw, borrowed from the App
pub struct PageRenderContext<'a> {
    pub content: &'a PortfolioContent,
    pub contact: &'a ContactForm,
}

pub struct PageComponent {
    pub active: Section,
    pub hero: HeroComponent,
    pub about: AboutComponent,
    pub projects: ProjectsComponent,
    pub contact: ContactComponent,
}

impl PageComponent {
    pub fn new(content: &PortfolioContent) -> Self {
        let mut projects = ProjectsComponent::new();
        projects.set_projects(&content.projects);
        Self {
            active: Section::Home,
            hero: HeroComponent::new(),
            about: AboutComponent::new(),
            projects,
            contact: ContactComponent::new(),
        }
    }

    /// Whether keys currently go into a text field
    pub fn is_typing(&self) -> bool {
        self.active == Section::Contact && self.contact.editing
    }

    pub fn go_to(&mut self, section: Section) {
        if self.active == Section::Contact && section != Section::Contact {
            self.contact.stop_editing();
        }
        self.active = section;
    }

    fn active_component(&mut self) -> &mut dyn Component {
        match self.active {
            Section::Home => &mut self.hero,
            Section::About => &mut self.about,
            Section::Projects => &mut self.projects,
            Section::Contact => &mut self.contact,
        }
    }
}

impl Component for PageComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.is_typing() {
            return self.contact.handle_key_event(key);
        }

        let action = match key.code {
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('x') => Some(Action::DismissToast),
            KeyCode::Tab => Some(Action::NextSection),
            KeyCode::BackTab => Some(Action::PrevSection),
            KeyCode::Char(c @ '1'..='4') => c
                .to_digit(10)
                .and_then(Section::from_number)
                .map(Action::GoToSection),
            _ => return self.active_component().handle_key_event(key),
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::NextSection => self.go_to(self.active.next()),
            Action::PrevSection => self.go_to(self.active.previous()),
            Action::GoToSection(section) => self.go_to(section),
            Action::NextItem | Action::PrevItem => {
                return self.active_component().update(action);
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Needs content and form state, so we use draw_page
        Ok(())
    }
}

/// Draw the whole page
pub fn draw_page(
    frame: &mut Frame,
    area: Rect,
    page: &mut PageComponent,
    ctx: &PageRenderContext,
) -> Result<()> {
    let layout = calculate_page_layout(area);
    let info = &ctx.content.personal_info;

    render_header(frame, layout.header, page.active, &info.initials());

    match page.active {
        Section::Home => page.hero.draw_with_info(frame, layout.body, info)?,
        Section::About => page
            .about
            .draw_with_about(frame, layout.body, &ctx.content.about_info)?,
        Section::Projects => page
            .projects
            .draw_with_projects(frame, layout.body, &ctx.content.projects)?,
        Section::Contact => page
            .contact
            .draw_with_form(frame, layout.body, ctx.contact, info)?,
    }

    let footer = Paragraph::new(Span::styled(
        footer_text(&info.name, Local::now().year()),
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(footer, layout.footer);

    render_help_bar(frame, layout.help, page, ctx.contact.is_submitting());
    Ok(())
}

pub fn footer_text(name: &str, year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, name)
}

fn render_header(frame: &mut Frame, area: Rect, active: Section, initials: &str) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(area);

    let badge = Paragraph::new(Span::styled(
        initials.to_string(),
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().borders(Borders::BOTTOM))
    .alignment(Alignment::Center);
    frame.render_widget(badge, chunks[0]);

    let titles: Vec<&str> = Section::all().iter().map(|s| s.name()).collect();
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::BOTTOM))
        .select(active.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, chunks[1]);
}

fn key_hint(key: &str, color: Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", key),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

fn render_help_bar(frame: &mut Frame, area: Rect, page: &PageComponent, submitting: bool) {
    let mut spans = if page.is_typing() {
        vec![
            key_hint("Esc", Color::Yellow),
            Span::raw("Stop editing  "),
            key_hint("Tab", Color::Green),
            Span::raw("Next field  "),
            key_hint("Ctrl+s", Color::Green),
            Span::raw("Send  "),
        ]
    } else {
        let mut spans = vec![
            key_hint("q", Color::Yellow),
            Span::raw("Quit  "),
            key_hint("Tab", Color::Green),
            Span::raw("Section  "),
        ];
        match page.active {
            Section::Home => {
                spans.push(key_hint("Enter", Color::Green));
                spans.push(Span::raw("Open  "));
            }
            Section::About => {
                spans.push(key_hint("r", Color::Green));
                spans.push(Span::raw("Resume  "));
            }
            Section::Projects => {
                spans.push(key_hint("d", Color::Green));
                spans.push(Span::raw("Demo  "));
                spans.push(key_hint("c", Color::Green));
                spans.push(Span::raw("Code  "));
            }
            Section::Contact => {
                spans.push(key_hint("i", Color::Green));
                spans.push(Span::raw("Edit  "));
                spans.push(key_hint("Ctrl+s", Color::Green));
                spans.push(Span::raw("Send  "));
            }
        }
        spans.push(key_hint("?", Color::Cyan));
        spans.push(Span::raw("Help  "));
        spans
    };

    if submitting {
        spans.push(Span::styled(
            "Sending message...",
            Style::default().fg(Color::Yellow),
        ));
    }

    let help = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_number_keys_pick_sections() {
        let mut page = PageComponent::new(&PortfolioContent::sample());
        assert_eq!(
            page.handle_key_event(key(KeyCode::Char('3'))).unwrap(),
            Some(Action::GoToSection(Section::Projects))
        );
        assert_eq!(page.handle_key_event(key(KeyCode::Char('9'))).unwrap(), None);
    }

    #[test]
    fn test_typing_bypasses_global_keys() {
        let mut page = PageComponent::new(&PortfolioContent::sample());
        page.update(Action::GoToSection(Section::Contact)).unwrap();
        page.contact.start_editing();

        assert_eq!(
            page.handle_key_event(key(KeyCode::Char('q'))).unwrap(),
            Some(Action::FormInput('q'))
        );
    }

    #[test]
    fn test_leaving_contact_stops_editing() {
        let mut page = PageComponent::new(&PortfolioContent::sample());
        page.update(Action::GoToSection(Section::Contact)).unwrap();
        page.contact.start_editing();
        page.update(Action::NextSection).unwrap();

        assert_eq!(page.active, Section::Home);
        assert!(!page.contact.editing);
    }

    #[test]
    fn test_item_navigation_reaches_active_section() {
        let mut page = PageComponent::new(&PortfolioContent::sample());
        page.update(Action::GoToSection(Section::Projects)).unwrap();
        page.update(Action::NextItem).unwrap();
        assert_eq!(page.projects.selected_id(), Some(2));
    }

    #[test]
    fn test_footer_text() {
        assert_eq!(
            footer_text("Nabaraj Bhatta", 2025),
            "© 2025 Nabaraj Bhatta. All rights reserved."
        );
    }

    #[test]
    fn test_draws_hero_by_default() {
        let content = PortfolioContent::sample();
        let form = ContactForm::new();
        let mut page = PageComponent::new(&content);
        let ctx = PageRenderContext {
            content: &content,
            contact: &form,
        };

        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal
            .draw(|frame| draw_page(frame, frame.area(), &mut page, &ctx).unwrap())
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Nabaraj Bhatta"));
        assert!(text.contains("Get In Touch"));
        assert!(text.contains("All rights reserved."));
    }
}
