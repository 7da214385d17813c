//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that routes keys to the active screen, modal or preview and applies the
//! resulting Actions to the domain state. Submissions run on a background
//! worker and are picked up on Tick.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_page, draw_toasts, HelpDialog, PageComponent, PageRenderContext, PreviewDialog,
    QuitDialog, SplashComponent,
};
use crate::config::Config;
use crate::model::domain::DomainState;
use crate::model::modal::{Modal, ModalStack};
use crate::model::{AppMode, Notification, PortfolioContent, Section};
use crate::services::{self, ContactSubmitter, MockSubmitter, SubmissionRunner};
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// Domain state (content, contact form, preview selection, toasts)
    pub domain: DomainState,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Background contact submission runner
    pub runner: SubmissionRunner,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Link to open (set by OpenLink action, handled by main loop)
    pub pending_link: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub page: PageComponent,
    pub preview_dialog: PreviewDialog,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create an App backed by the mock submission service
    pub fn new(config: &Config) -> App {
        let submitter = Arc::new(MockSubmitter::new(config.submit_delay()));
        Self::with_submitter(config, submitter)
    }

    /// Create an App with an explicit submission backend
    pub fn with_submitter(config: &Config, submitter: Arc<dyn ContactSubmitter>) -> App {
        let (content, load_error) = match config.content_path.as_deref() {
            Some(path) => load_content(Path::new(path)),
            None => (PortfolioContent::sample(), None),
        };

        let info = &content.personal_info;
        let splash = SplashComponent::new(&info.name, &info.title, config.splash_duration());
        let page = PageComponent::new(&content);

        let mut domain = DomainState::new(content, config.toast_duration());
        if let Some(notification) = load_error {
            domain.notifications.push(notification);
        }

        App {
            mode: AppMode::Splash,
            domain,
            modals: ModalStack::new(),
            runner: SubmissionRunner::new(submitter),
            should_quit: false,
            pending_link: None,
            splash,
            page,
            preview_dialog: PreviewDialog::new(),
            quit_dialog: QuitDialog::default(),
            help_dialog: HelpDialog::default(),
        }
    }

    /// Validate and hand the form to the background runner
    fn submit_contact(&mut self) {
        let contact = &mut self.domain.contact;
        if contact.is_submitting() {
            debug!("Submit pressed while a submission is in flight");
            return;
        }

        if !contact.is_complete() {
            let missing = contact.missing_fields();
            self.page.go_to(Section::Contact);
            self.page.contact.show_missing(&missing);
            return;
        }

        if !contact.has_valid_email() {
            debug!("Submit blocked, malformed email");
            self.page.go_to(Section::Contact);
            self.page.contact.show_invalid_email();
            return;
        }

        if let Some(data) = contact.begin_submit() {
            info!(email = %data.email, "Submitting contact form");
            self.page.contact.stop_editing();
            if !self.runner.spawn(data) {
                // Runner still busy with an older submission, fail this one
                let notification = self
                    .domain
                    .contact
                    .finish_submit(Err(services::SubmitError::Rejected(
                        "submission already in flight".to_string(),
                    )));
                self.domain.notifications.push(notification);
            }
        }
    }

    /// Resolve a finished submission, if any
    fn poll_submission(&mut self) {
        if let Some(outcome) = self.runner.poll() {
            let notification = self.domain.contact.finish_submit(outcome);
            if !notification.is_destructive() {
                self.page.contact.reset();
            }
            self.domain.notifications.push(notification);
        }
    }

    /// Apply one keystroke to the focused contact field
    fn edit_focused_field(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(field) = self.page.contact.focused_field() else {
            return;
        };
        let mut value = self.domain.contact.field(field).to_string();
        edit(&mut value);
        self.domain.contact.update_field(field, value);
    }

    fn open_preview(&mut self, id: u32) {
        let Some(project) = self.domain.content.project_by_id(id) else {
            warn!(id, "Preview requested for unknown project");
            return;
        };
        if self.domain.preview.select(project) {
            self.preview_dialog.reset();
        }
    }

    fn open_link(&mut self, target: crate::model::LinkTarget) {
        match self.domain.content.resolve_link(target) {
            Some(link) if services::is_openable(&link) => {
                self.pending_link = Some(link);
            }
            _ => {
                debug!(target = target.label(), "No link to open");
            }
        }
    }

    /// Push a notification, e.g. when the main loop fails to open a link
    pub fn notify(&mut self, notification: Notification) {
        self.domain.notifications.push(notification);
    }
}

/// Read a content file, falling back to the sample portfolio on failure
fn load_content(path: &Path) -> (PortfolioContent, Option<Notification>) {
    match PortfolioContent::load_from(path) {
        Ok(content) => {
            info!(path = %path.display(), "Loaded portfolio content");
            (content, None)
        }
        Err(e) => {
            warn!(error = %e, "Falling back to sample content");
            (
                PortfolioContent::sample(),
                Some(Notification::destructive(
                    "Content not loaded",
                    format!("{}. Showing sample content.", e),
                )),
            )
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.splash.init()?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match self.mode {
            AppMode::Splash => self.splash.handle_key_event(key),
            AppMode::Running => {
                if let Some(modal) = self.modals.top().cloned() {
                    match modal {
                        Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
                        Modal::Help => self.help_dialog.handle_key_event(key),
                    }
                } else if self.domain.preview.is_open() {
                    self.preview_dialog.handle_key_event(key)
                } else {
                    self.page.handle_key_event(key)
                }
            }
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                self.poll_submission();
                self.domain.notifications.prune();
                if self.mode == AppMode::Splash {
                    return self.splash.update(Action::Tick);
                }
            }
            Action::SplashComplete => {
                self.mode = AppMode::Running;
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Navigation (delegate to PageComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::NextSection
            | Action::PrevSection
            | Action::GoToSection(_)
            | Action::NextItem
            | Action::PrevItem => {
                return self.page.update(action);
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.quit_dialog.submission_pending = self.runner.is_pending();
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ConfirmModal => {
                if self.modals.top() == Some(&Modal::QuitConfirm) {
                    self.should_quit = true;
                }
                self.modals.pop();
            }

            // ─────────────────────────────────────────────────────────────────
            // Projects
            // ─────────────────────────────────────────────────────────────────
            Action::OpenPreview(id) => self.open_preview(id),
            Action::ClosePreview => self.domain.preview.clear(),

            Action::OpenLink(target) => self.open_link(target),

            // ─────────────────────────────────────────────────────────────────
            // Contact Form
            // ─────────────────────────────────────────────────────────────────
            Action::StartEditing | Action::StopEditing => {
                self.page.contact.update(action)?;
            }
            Action::FormInput(c) => {
                self.edit_focused_field(|value| value.push(c));
                self.page.contact.update(action)?;
            }
            Action::FormBackspace => {
                self.edit_focused_field(|value| {
                    value.pop();
                });
                self.page.contact.update(action)?;
            }
            Action::SubmitContact => self.submit_contact(),

            Action::DismissToast => {
                self.domain.notifications.dismiss_latest();
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.mode {
            AppMode::Splash => self.splash.draw(frame, area)?,
            AppMode::Running => {
                let ctx = PageRenderContext {
                    content: &self.domain.content,
                    contact: &self.domain.contact,
                };
                draw_page(frame, area, &mut self.page, &ctx)?;

                if let Some(project) = self.domain.preview.selected() {
                    self.preview_dialog.draw_with_project(frame, area, project)?;
                }

                match self.modals.top() {
                    Some(Modal::QuitConfirm) => self.quit_dialog.draw(frame, area)?,
                    Some(Modal::Help) => self.help_dialog.draw(frame, area)?,
                    None => {}
                }
            }
        }

        draw_toasts(frame, area, &self.domain.notifications);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::contact::INVALID_EMAIL_HINT;
    use crate::model::contact::{ERROR_TITLE, FAILURE_MESSAGE, SUCCESS_TITLE};
    use crate::model::{FormField, LinkTarget};
    use crate::services::submission::SUCCESS_MESSAGE;
    use crate::services::submission::{ContactFormData, SubmitAck, SubmitError};
    use std::io::Write;
    use std::thread;
    use std::time::{Duration, Instant};

    struct Rejecting;

    impl ContactSubmitter for Rejecting {
        fn submit(&self, _data: &ContactFormData) -> Result<SubmitAck, SubmitError> {
            Err(SubmitError::Rejected("server said no".to_string()))
        }
    }

    fn running_app(submitter: Arc<dyn ContactSubmitter>) -> App {
        let mut app = App::with_submitter(&Config::default(), submitter);
        app.update(Action::SplashComplete).unwrap();
        app
    }

    fn fill_form(app: &mut App) {
        app.domain.contact.update_field(FormField::Name, "Ada");
        app.domain.contact.update_field(FormField::Email, "ada@example.com");
        app.domain.contact.update_field(FormField::Message, "Hello");
    }

    /// Tick until the runner reports back
    fn tick_until_settled(app: &mut App) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while app.domain.contact.is_submitting() && Instant::now() < deadline {
            app.update(Action::Tick).unwrap();
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_submit_success_clears_form_and_toasts() {
        let mut app = running_app(Arc::new(MockSubmitter::new(Duration::ZERO)));
        fill_form(&mut app);

        app.update(Action::SubmitContact).unwrap();
        assert!(app.domain.contact.is_submitting());
        assert!(app.runner.is_pending());

        tick_until_settled(&mut app);

        assert!(!app.domain.contact.is_submitting());
        assert_eq!(app.domain.contact.field(FormField::Name), "");
        assert_eq!(app.domain.contact.field(FormField::Message), "");
        let toast = app.domain.notifications.latest().unwrap();
        assert_eq!(toast.title, SUCCESS_TITLE);
        assert_eq!(toast.description, SUCCESS_MESSAGE);
        assert!(!toast.is_destructive());
    }

    #[test]
    fn test_submit_failure_keeps_fields() {
        let mut app = running_app(Arc::new(Rejecting));
        fill_form(&mut app);

        app.update(Action::SubmitContact).unwrap();
        tick_until_settled(&mut app);

        assert_eq!(app.domain.contact.field(FormField::Email), "ada@example.com");
        let toast = app.domain.notifications.latest().unwrap();
        assert_eq!(toast.title, ERROR_TITLE);
        assert_eq!(toast.description, FAILURE_MESSAGE);
        assert!(toast.is_destructive());
    }

    #[test]
    fn test_second_submit_while_in_flight_is_ignored() {
        let mut app = running_app(Arc::new(MockSubmitter::new(Duration::from_millis(200))));
        fill_form(&mut app);

        app.update(Action::SubmitContact).unwrap();
        app.update(Action::SubmitContact).unwrap();
        assert!(app.domain.notifications.is_empty());

        tick_until_settled(&mut app);
        assert_eq!(app.domain.notifications.len(), 1);
    }

    #[test]
    fn test_incomplete_form_is_not_sent() {
        let mut app = running_app(Arc::new(MockSubmitter::new(Duration::ZERO)));
        app.domain.contact.update_field(FormField::Name, "Ada");

        app.update(Action::SubmitContact).unwrap();

        assert!(!app.domain.contact.is_submitting());
        assert!(!app.runner.is_pending());
        assert_eq!(app.page.active, Section::Contact);
        assert_eq!(app.page.contact.focused_field(), Some(FormField::Email));
        assert!(app.page.contact.editing);
    }

    #[test]
    fn test_malformed_email_is_not_sent() {
        let mut app = running_app(Arc::new(MockSubmitter::new(Duration::ZERO)));
        app.domain.contact.update_field(FormField::Name, "A");
        app.domain.contact.update_field(FormField::Email, "not-an-email");
        app.domain.contact.update_field(FormField::Message, "hi");

        app.update(Action::SubmitContact).unwrap();

        assert!(!app.domain.contact.is_submitting());
        assert!(!app.runner.is_pending());
        assert_eq!(app.domain.contact.field(FormField::Email), "not-an-email");
        assert_eq!(app.page.active, Section::Contact);
        assert_eq!(app.page.contact.focused_field(), Some(FormField::Email));
        assert_eq!(app.page.contact.hint.as_deref(), Some(INVALID_EMAIL_HINT));
    }

    #[test]
    fn test_unaccepted_ack_keeps_fields() {
        struct Declining;

        impl ContactSubmitter for Declining {
            fn submit(&self, _data: &ContactFormData) -> Result<SubmitAck, SubmitError> {
                Ok(SubmitAck {
                    success: false,
                    message: "Mailbox full".to_string(),
                })
            }
        }

        let mut app = running_app(Arc::new(Declining));
        fill_form(&mut app);

        app.update(Action::SubmitContact).unwrap();
        tick_until_settled(&mut app);

        assert_eq!(app.domain.contact.field(FormField::Name), "Ada");
        let toast = app.domain.notifications.latest().unwrap();
        assert_eq!(toast.title, ERROR_TITLE);
        assert!(toast.is_destructive());
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let mut app = running_app(Arc::new(MockSubmitter::new(Duration::ZERO)));
        app.update(Action::GoToSection(Section::Contact)).unwrap();
        app.update(Action::StartEditing).unwrap();

        for c in "Adx".chars() {
            app.update(Action::FormInput(c)).unwrap();
        }
        app.update(Action::FormBackspace).unwrap();
        app.update(Action::FormInput('a')).unwrap();

        assert_eq!(app.domain.contact.field(FormField::Name), "Ada");
    }

    #[test]
    fn test_preview_open_and_close() {
        let mut app = running_app(Arc::new(MockSubmitter::new(Duration::ZERO)));

        app.update(Action::OpenPreview(1)).unwrap();
        assert_eq!(app.domain.preview.selected().map(|p| p.id), Some(1));

        // Project 2 has no previews, the open preview stays
        app.update(Action::OpenPreview(2)).unwrap();
        assert_eq!(app.domain.preview.selected().map(|p| p.id), Some(1));

        app.update(Action::ClosePreview).unwrap();
        assert!(!app.domain.preview.is_open());
    }

    #[test]
    fn test_quit_requires_confirmation() {
        let mut app = running_app(Arc::new(MockSubmitter::new(Duration::ZERO)));

        app.update(Action::OpenQuitDialog).unwrap();
        app.update(Action::CloseModal).unwrap();
        assert!(!app.should_quit);

        app.update(Action::OpenQuitDialog).unwrap();
        app.update(Action::ConfirmModal).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_placeholder_links_are_not_opened() {
        let mut app = running_app(Arc::new(MockSubmitter::new(Duration::ZERO)));

        app.update(Action::OpenLink(LinkTarget::Email)).unwrap();
        assert_eq!(app.pending_link.take().as_deref(), Some("mailto:nabarajbhatta04@gmail.com"));

        app.domain.content.personal_info.resume_url = "#".to_string();
        app.update(Action::OpenLink(LinkTarget::Resume)).unwrap();
        assert!(app.pending_link.is_none());
    }

    #[test]
    fn test_bad_content_path_falls_back_with_toast() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "personalInfo: [not, a, map]").unwrap();

        let config = Config {
            content_path: Some(path.to_string_lossy().to_string()),
            ..Config::default()
        };
        let app = App::with_submitter(&config, Arc::new(MockSubmitter::new(Duration::ZERO)));

        assert_eq!(app.domain.content, PortfolioContent::sample());
        assert!(app.domain.notifications.latest().unwrap().is_destructive());
    }
}
