//! Component trait - Interface for UI components
//!
//! Each component owns its presentation state (focus, scroll), turns key
//! events into Actions, and renders itself. Domain state lives in the App and
//! is handed to components when they draw.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// The pattern follows:
/// 1. `handle_key_event` - Convert events to Actions
/// 2. `update` - Process Actions and update local state
/// 3. `draw` - Render the component
pub trait Component {
    /// Initialize the component
    ///
    /// Called once when the component is created.
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Handle a key event, returning an optional Action
    ///
    /// Only presentation state (focus, scroll) may change here; domain
    /// changes go through the returned Action.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Update component state based on an Action
    ///
    /// May return a follow-up Action.
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Draw the component to the frame
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
