//! External service interactions
//!
//! - Contact form submission backend and its background runner
//! - Opening links in the platform handler

pub mod browser;
pub mod submission;
pub mod submission_runner;

pub use browser::{is_openable, open_command};
pub use submission::{ContactSubmitter, MockSubmitter, SubmitError};
pub use submission_runner::SubmissionRunner;
