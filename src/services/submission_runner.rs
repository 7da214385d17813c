//! Background submission runner
//!
//! Runs a `ContactSubmitter` on a worker thread and hands the outcome back to
//! the event loop, which polls on every tick.

use crate::services::submission::{ContactFormData, ContactSubmitter, SubmitAck, SubmitError};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{debug, warn};

pub type SubmitOutcome = Result<SubmitAck, SubmitError>;

/// An in-flight submission
struct PendingSubmission {
    receiver: Receiver<SubmitOutcome>,
    start_instant: Instant,
}

/// Executes submissions off the UI thread, one at a time
pub struct SubmissionRunner {
    submitter: Arc<dyn ContactSubmitter>,
    pending: Option<PendingSubmission>,
}

impl SubmissionRunner {
    pub fn new(submitter: Arc<dyn ContactSubmitter>) -> Self {
        Self {
            submitter,
            pending: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Spawn a worker for `data`
    ///
    /// Returns false (and does nothing) if a submission is already in flight.
    pub fn spawn(&mut self, data: ContactFormData) -> bool {
        if self.pending.is_some() {
            warn!("Submission already in flight, ignoring new request");
            return false;
        }

        let (tx, rx) = mpsc::channel();
        let submitter = Arc::clone(&self.submitter);

        thread::spawn(move || {
            let outcome = submitter.submit(&data);
            // Receiver may be gone if the app quit mid-flight
            let _ = tx.send(outcome);
        });

        debug!("Submission worker spawned");
        self.pending = Some(PendingSubmission {
            receiver: rx,
            start_instant: Instant::now(),
        });
        true
    }

    /// Poll for the outcome, returns `Some` exactly once per submission
    pub fn poll(&mut self) -> Option<SubmitOutcome> {
        let pending = self.pending.as_ref()?;

        let outcome = match pending.receiver.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                warn!("Submission worker exited without reporting");
                Err(SubmitError::WorkerDisconnected)
            }
        };

        if let Some(done) = self.pending.take() {
            debug!(
                elapsed_ms = done.start_instant.elapsed().as_millis() as u64,
                ok = outcome.is_ok(),
                "Submission finished"
            );
        }
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::submission::{MockSubmitter, SUCCESS_MESSAGE};
    use std::time::Duration;

    struct Rejecting;

    impl ContactSubmitter for Rejecting {
        fn submit(&self, _data: &ContactFormData) -> SubmitOutcome {
            Err(SubmitError::Rejected("offline".to_string()))
        }
    }

    struct Panicking;

    impl ContactSubmitter for Panicking {
        fn submit(&self, _data: &ContactFormData) -> SubmitOutcome {
            panic!("backend blew up");
        }
    }

    fn wait_for(runner: &mut SubmissionRunner) -> SubmitOutcome {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(outcome) = runner.poll() {
                return outcome;
            }
            assert!(Instant::now() < deadline, "submission never finished");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_poll_without_submission() {
        let mut runner = SubmissionRunner::new(Arc::new(MockSubmitter::new(Duration::ZERO)));
        assert!(!runner.is_pending());
        assert!(runner.poll().is_none());
    }

    #[test]
    fn test_successful_submission_is_reported_once() {
        let mut runner = SubmissionRunner::new(Arc::new(MockSubmitter::new(Duration::ZERO)));
        assert!(runner.spawn(ContactFormData::default()));
        assert!(runner.is_pending());

        let ack = wait_for(&mut runner).unwrap();
        assert_eq!(ack.message, SUCCESS_MESSAGE);
        assert!(!runner.is_pending());
        assert!(runner.poll().is_none());
    }

    #[test]
    fn test_second_spawn_is_refused_while_pending() {
        let mut runner =
            SubmissionRunner::new(Arc::new(MockSubmitter::new(Duration::from_millis(50))));
        assert!(runner.spawn(ContactFormData::default()));
        assert!(!runner.spawn(ContactFormData::default()));
        assert!(wait_for(&mut runner).is_ok());
    }

    #[test]
    fn test_rejection_is_passed_through() {
        let mut runner = SubmissionRunner::new(Arc::new(Rejecting));
        runner.spawn(ContactFormData::default());
        assert_eq!(
            wait_for(&mut runner),
            Err(SubmitError::Rejected("offline".to_string()))
        );
    }

    #[test]
    fn test_panicking_worker_becomes_disconnected_error() {
        let mut runner = SubmissionRunner::new(Arc::new(Panicking));
        runner.spawn(ContactFormData::default());
        assert_eq!(wait_for(&mut runner), Err(SubmitError::WorkerDisconnected));
    }
}
