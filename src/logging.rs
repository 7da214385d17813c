//! File logging
//!
//! The terminal belongs to the UI, so tracing output goes to
//! `~/.folio-tui/folio-tui.log` instead of stderr.

use crate::config::Config;
use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_directive(level: &str) -> String {
    format!("folio_tui={}", level)
}

/// Build the filter: `RUST_LOG` if set, otherwise `folio_tui=<level>`
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(level)))
        .unwrap_or_else(|_| EnvFilter::new(default_directive("info")))
}

fn open_log_file() -> Option<(PathBuf, File)> {
    let dir = Config::config_dir()?;
    fs::create_dir_all(&dir).ok()?;
    let path = dir.join("folio-tui.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;
    Some((path, file))
}

/// Initialize logging. Returns the log file path, or `None` if logging is off.
pub fn init_logging(level: &str) -> Option<PathBuf> {
    let (path, file) = open_log_file()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .with(build_filter(level))
        .try_init()
        .ok()?;

    Some(path)
}
