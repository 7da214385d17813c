//! Terminal lifecycle
//!
//! Raw mode, the alternate screen and event polling around ratatui's Terminal.

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::{
    io::{self, Stdout},
    time::Duration,
};

pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// How long `next_event` waits before reporting a tick
    pub tick_rate: Duration,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self {
            terminal,
            tick_rate: Duration::from_millis(100),
        })
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Switch to raw mode on the alternate screen
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        crossterm::execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Restore the normal screen. Also runs on Drop.
    pub fn exit(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        crossterm::execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
        Ok(())
    }

    /// Give the terminal back while an external program runs
    pub fn suspend(&mut self) -> Result<()> {
        self.exit()
    }

    pub fn resume(&mut self) -> Result<()> {
        self.enter()
    }

    /// Wait up to `tick_rate` for an event
    ///
    /// `None` means the wait timed out, or a key release was filtered out.
    pub fn next_event(&self) -> Result<Option<Event>> {
        if !event::poll(self.tick_rate)? {
            return Ok(None);
        }

        match event::read()? {
            // Windows reports releases as well as presses
            Event::Key(key) if key.kind != KeyEventKind::Press => Ok(None),
            event => Ok(Some(event)),
        }
    }

    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}
