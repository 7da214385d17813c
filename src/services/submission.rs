//! Contact form submission backend
//!
//! The controller only sees the `ContactSubmitter` trait. `MockSubmitter`
//! simulates a network round-trip and always succeeds; a real transport can be
//! swapped in without touching the form logic.

use serde::{Deserialize, Serialize};
use std::thread;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Message returned by the mock backend on success
pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";

/// Snapshot of the form fields handed to the backend
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Acknowledgement from the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitAck {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("submission rejected: {0}")]
    Rejected(String),
    #[error("submission worker stopped without a result")]
    WorkerDisconnected,
}

/// Delivers a contact message somewhere
///
/// Implementations may block; the runner calls them off the UI thread.
pub trait ContactSubmitter: Send + Sync {
    fn submit(&self, data: &ContactFormData) -> Result<SubmitAck, SubmitError>;
}

/// Backend that waits a fixed delay and reports success
#[derive(Debug, Clone)]
pub struct MockSubmitter {
    delay: Duration,
}

impl Default for MockSubmitter {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

impl MockSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl ContactSubmitter for MockSubmitter {
    fn submit(&self, data: &ContactFormData) -> Result<SubmitAck, SubmitError> {
        thread::sleep(self.delay);
        info!(
            name = %data.name,
            email = %data.email,
            message_len = data.message.len(),
            "Mock form submission"
        );
        Ok(SubmitAck {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_mock_submitter_always_succeeds() {
        let submitter = MockSubmitter::new(Duration::ZERO);
        let data = ContactFormData {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            message: "hi".to_string(),
        };

        let ack = submitter.submit(&data).unwrap();
        assert!(ack.success);
        assert_eq!(ack.message, SUCCESS_MESSAGE);
    }

    #[test]
    fn test_mock_submitter_waits_for_delay() {
        let submitter = MockSubmitter::new(Duration::from_millis(30));
        let start = Instant::now();
        submitter.submit(&ContactFormData::default()).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(30));
    }
}
