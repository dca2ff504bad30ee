//! User-visible acknowledgments for cart operations.
//!
//! Every successful mutation produces a brief acknowledgment and every
//! persistence failure a non-blocking notice. The [`Notifier`] seam lets a
//! UI render these as toasts, while headless embeddings and tests observe
//! them directly.

use std::cell::RefCell;

/// Severity of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// A mutation succeeded (add).
    Success,
    /// An informational acknowledgment (remove, clear).
    Info,
    /// A non-blocking failure notice (persistence trouble).
    Error,
}

/// Sink for user-visible acknowledgments.
pub trait Notifier {
    /// Deliver one notice.
    fn notify(&self, level: NoticeLevel, message: &str);

    /// Success acknowledgment.
    fn success(&self, message: &str) {
        self.notify(NoticeLevel::Success, message);
    }

    /// Informational acknowledgment.
    fn info(&self, message: &str) {
        self.notify(NoticeLevel::Info, message);
    }

    /// Non-blocking failure notice.
    fn error(&self, message: &str) {
        self.notify(NoticeLevel::Error, message);
    }
}

/// Default notifier: forwards notices to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Success | NoticeLevel::Info => {
                tracing::info!(target: "medibay_cart::notice", "{message}");
            }
            NoticeLevel::Error => {
                tracing::warn!(target: "medibay_cart::notice", "{message}");
            }
        }
    }
}

/// Notifier that records notices for later inspection.
///
/// Used by tests to assert on user-visible behavior, and by embedders that
/// render their own notifications.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<(NoticeLevel, String)>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices delivered so far, oldest first.
    #[must_use]
    pub fn notices(&self) -> Vec<(NoticeLevel, String)> {
        self.notices.borrow().clone()
    }

    /// Messages delivered at the given level, oldest first.
    #[must_use]
    pub fn messages_at(&self, level: NoticeLevel) -> Vec<String> {
        self.notices
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        self.notices.borrow_mut().push((level, message.to_string()));
    }
}
