//! Domain state - the portfolio content and the two interactive controllers

use super::contact::ContactForm;
use super::content::PortfolioContent;
use super::notification::NotificationCenter;
use super::preview::ProjectPreview;
use std::time::Duration;

/// Domain state owned by the root view
#[derive(Debug, Default)]
pub struct DomainState {
    /// Static content (profile, skills, projects)
    pub content: PortfolioContent,

    /// Contact form controller
    pub contact: ContactForm,

    /// Project preview selection
    pub preview: ProjectPreview,

    /// Active toasts
    pub notifications: NotificationCenter,
}

impl DomainState {
    pub fn new(content: PortfolioContent, toast_lifetime: Duration) -> Self {
        Self {
            content,
            contact: ContactForm::new(),
            preview: ProjectPreview::new(),
            notifications: NotificationCenter::new(toast_lifetime),
        }
    }
}
