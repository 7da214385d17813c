//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::{LinkTarget, Section};
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for animations/updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,
    /// Transition from splash to main app
    SplashComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Switch to the next page section
    NextSection,
    /// Switch to the previous page section
    PrevSection,
    /// Jump straight to a section
    GoToSection(Section),
    /// Move to next item in the current section
    NextItem,
    /// Move to previous item in the current section
    PrevItem,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
    /// Confirm the current modal action
    ConfirmModal,

    // ─────────────────────────────────────────────────────────────────────────
    // Projects
    // ─────────────────────────────────────────────────────────────────────────
    /// Demo button: preview the project with this id
    OpenPreview(u32),
    /// Dismiss the project preview
    ClosePreview,

    // ─────────────────────────────────────────────────────────────────────────
    // Links
    // ─────────────────────────────────────────────────────────────────────────
    /// Open a link in the platform handler
    OpenLink(LinkTarget),

    // ─────────────────────────────────────────────────────────────────────────
    // Contact Form
    // ─────────────────────────────────────────────────────────────────────────
    /// Start typing into the focused field
    StartEditing,
    /// Stop typing, keys go back to navigation
    StopEditing,
    /// Append a character to the focused field
    FormInput(char),
    /// Remove the last character of the focused field
    FormBackspace,
    /// Submit the contact form
    SubmitContact,

    // ─────────────────────────────────────────────────────────────────────────
    // Notifications
    // ─────────────────────────────────────────────────────────────────────────
    /// Dismiss the newest toast
    DismissToast,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SplashComplete => write!(f, "SplashComplete"),
            Action::NextSection => write!(f, "NextSection"),
            Action::PrevSection => write!(f, "PrevSection"),
            Action::GoToSection(section) => write!(f, "GoToSection({})", section.name()),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
            Action::OpenPreview(id) => write!(f, "OpenPreview({})", id),
            Action::ClosePreview => write!(f, "ClosePreview"),
            Action::OpenLink(target) => write!(f, "OpenLink({})", target.label()),
            Action::StartEditing => write!(f, "StartEditing"),
            Action::StopEditing => write!(f, "StopEditing"),
            Action::FormInput(c) => write!(f, "FormInput('{}')", c),
            Action::FormBackspace => write!(f, "FormBackspace"),
            Action::SubmitContact => write!(f, "SubmitContact"),
            Action::DismissToast => write!(f, "DismissToast"),
        }
    }
}
