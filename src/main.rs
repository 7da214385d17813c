//! folio-tui - A personal portfolio in the terminal
//!
//! This is the main entry point for folio-tui.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::model::Notification;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use tracing::{error, info};

fn main() -> Result<()> {
    let config = Config::load();
    if Config::config_dir().is_some_and(|dir| !dir.join("config.json").exists()) {
        // First run: write defaults so they can be edited
        if let Err(e) = config.save() {
            eprintln!("Could not write default config: {}", e);
        }
    }

    let log_path = logging::init_logging(&config.log_level);
    info!(log = ?log_path, "Starting folio-tui");

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(config.tick_rate());
    tui.enter()?;

    let mut app = App::new(&config);
    app.init()?;

    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    if let Err(err) = result {
        error!(error = ?err, "Exited with error");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    info!("Goodbye");
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                error!(error = %e, "Draw failed");
            }
        })?;

        // Links are opened outside the alternate screen
        if let Some(link) = app.pending_link.take() {
            open_link(tui, app, &link)?;
            continue;
        }

        let action = match tui.next_event()? {
            Some(Event::Key(key)) => app.handle_key_event(key)?,
            Some(Event::Resize(w, h)) => Some(Action::Resize(w, h)),
            Some(_) => None,
            // No event - send a tick for time-based updates
            None => Some(Action::Tick),
        };

        // An action may produce a follow-up action
        let mut current_action = action;
        while let Some(a) = current_action {
            current_action = app.update(a)?;
        }
    }

    Ok(())
}

/// Hand a link to the platform opener
fn open_link(tui: &mut Tui, app: &mut App, link: &str) -> Result<()> {
    info!(link, "Opening link");

    tui.suspend()?;
    let status = services::open_command(link).status();
    tui.resume()?;

    let failure = match status {
        Ok(exit_status) if exit_status.success() => None,
        Ok(exit_status) => Some(format!("Opener exited with {}", exit_status)),
        Err(e) => Some(format!("Could not open {}: {}", link, e)),
    };

    if let Some(message) = failure {
        error!(link, %message, "Failed to open link");
        app.notify(Notification::destructive("Could not open link", message));
    }

    Ok(())
}
