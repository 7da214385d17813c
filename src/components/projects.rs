//! Projects gallery - project list with a detail card for the selection

use crate::action::Action;
use crate::component::Component;
use crate::model::content::{LinkTarget, Project};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Projects gallery. Keeps the ids of the listed projects so key handling can
/// name a project without access to the content.
#[derive(Default)]
pub struct ProjectsComponent {
    pub list_state: ListState,
    project_ids: Vec<u32>,
}

impl ProjectsComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the project list, selecting the first entry
    pub fn set_projects(&mut self, projects: &[Project]) {
        self.project_ids = projects.iter().map(|p| p.id).collect();
        self.list_state
            .select(if self.project_ids.is_empty() { None } else { Some(0) });
    }

    pub fn selected_id(&self) -> Option<u32> {
        self.list_state
            .selected()
            .and_then(|idx| self.project_ids.get(idx).copied())
    }

    pub fn next(&mut self) {
        if self.project_ids.is_empty() {
            return;
        }
        let last = self.project_ids.len() - 1;
        let idx = self.list_state.selected().map_or(0, |i| (i + 1).min(last));
        self.list_state.select(Some(idx));
    }

    pub fn previous(&mut self) {
        if self.project_ids.is_empty() {
            return;
        }
        let idx = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(idx));
    }

    pub fn draw_with_projects(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        projects: &[Project],
    ) -> Result<()> {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(area);

        let items: Vec<ListItem> = projects
            .iter()
            .map(|project| {
                let marker = if project.has_previews() { "◆ " } else { "◇ " };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Blue)),
                    Span::raw(project.title.clone()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Featured Projects ")
                    .title_style(
                        Style::default()
                            .fg(Color::Blue)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, columns[0], &mut self.list_state);

        let selected = self
            .selected_id()
            .and_then(|id| projects.iter().find(|p| p.id == id));
        if let Some(project) = selected {
            draw_project_card(frame, columns[1], project);
        } else {
            let empty = Paragraph::new("No projects yet")
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(empty, columns[1]);
        }

        Ok(())
    }
}

fn draw_project_card(frame: &mut Frame, area: Rect, project: &Project) {
    let mut badges = Vec::new();
    for tech in &project.technologies {
        badges.push(Span::styled(
            format!(" {} ", tech),
            Style::default().fg(Color::Blue).bg(Color::Rgb(219, 234, 254)),
        ));
        badges.push(Span::raw(" "));
    }

    let demo_style = if project.has_previews() {
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let lines = vec![
        Line::from(Span::styled(
            project.image.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(project.description.clone()),
        Line::from(""),
        Line::from(badges),
        Line::from(""),
        Line::from(vec![
            Span::styled(" d  Demo ", demo_style),
            Span::raw("  "),
            Span::styled(
                " c  Code ",
                Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(format!(" {} ", project.title))
            .title_style(Style::default().add_modifier(Modifier::BOLD)),
    );
    frame.render_widget(card, area);
}

impl Component for ProjectsComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Enter | KeyCode::Char('d') => self.selected_id().map(Action::OpenPreview),
            KeyCode::Char('c') => self
                .selected_id()
                .map(|id| Action::OpenLink(LinkTarget::ProjectSource(id))),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::NextItem => self.next(),
            Action::PrevItem => self.previous(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Needs the project list, so we use draw_with_projects
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PortfolioContent;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn component() -> ProjectsComponent {
        let mut projects = ProjectsComponent::new();
        projects.set_projects(&PortfolioContent::sample().projects);
        projects
    }

    #[test]
    fn test_navigation_clamps() {
        let mut projects = component();
        assert_eq!(projects.selected_id(), Some(1));

        projects.previous();
        assert_eq!(projects.selected_id(), Some(1));

        projects.next();
        projects.next();
        projects.next();
        assert_eq!(projects.selected_id(), Some(3));
    }

    #[test]
    fn test_demo_and_code_keys_name_the_selection() {
        let mut projects = component();
        projects.next();

        assert_eq!(
            projects.handle_key_event(key(KeyCode::Char('d'))).unwrap(),
            Some(Action::OpenPreview(2))
        );
        assert_eq!(
            projects.handle_key_event(key(KeyCode::Char('c'))).unwrap(),
            Some(Action::OpenLink(LinkTarget::ProjectSource(2)))
        );
    }

    #[test]
    fn test_empty_gallery() {
        let mut projects = ProjectsComponent::new();
        projects.set_projects(&[]);
        projects.next();
        assert_eq!(projects.selected_id(), None);
        assert_eq!(projects.handle_key_event(key(KeyCode::Enter)).unwrap(), None);
    }
}
