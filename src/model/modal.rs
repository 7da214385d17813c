//! Modal stack for managing overlays
//!
//! The project preview is not a stacked modal: its visibility follows the
//! preview selection. Everything else that overlays the page goes here.

/// Represents a modal overlay that can be displayed on top of the main UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Help dialog showing all keyboard shortcuts
    Help,
}

/// A stack of modal overlays
///
/// Only the top modal receives input events.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Push a modal, ignoring it if it is already on top
    pub fn push(&mut self, modal: Modal) {
        if self.top() != Some(&modal) {
            self.stack.push(modal);
        }
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }
}
