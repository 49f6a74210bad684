//! Per-execution context: account login, validation state and notifications.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Host-level validation state, checked before any request goes out.
pub trait ValidationState: Send + Sync {
    /// Whether the host currently has pending validation errors.
    fn has_errors(&self) -> bool;
}

impl ValidationState for bool {
    fn has_errors(&self) -> bool {
        *self
    }
}

impl ValidationState for AtomicBool {
    fn has_errors(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

/// Receives human-readable messages about tolerated failures.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Notifier that forwards messages to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::warn!("{message}");
    }
}

/// Extract a short error message suitable for display.
///
/// Takes the first line of an error message, which keeps notices readable
/// when transport errors carry multi-line details.
#[inline]
pub fn short_error_message(e: &impl std::error::Error) -> String {
    let full = e.to_string();
    full.lines().next().unwrap_or(&full).to_string()
}

/// Everything [`RemoteSelectQuery::execute`](crate::query::RemoteSelectQuery::execute)
/// reads from the host, constructed once per execution.
#[derive(Clone)]
pub struct QueryContext {
    /// GitHub account whose starred repositories are listed.
    pub login: String,
    pub validation: Arc<dyn ValidationState>,
    pub notifier: Arc<dyn Notifier>,
}

impl QueryContext {
    /// Context for `login` with no validation errors and tracing notifications.
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            validation: Arc::new(false),
            notifier: Arc::new(TracingNotifier),
        }
    }

    /// Context built from an optional login setting; a missing login becomes "".
    pub fn from_setting(login: Option<&str>) -> Self {
        Self::new(login.unwrap_or_default())
    }

    #[must_use]
    pub fn with_validation(mut self, validation: Arc<dyn ValidationState>) -> Self {
        self.validation = validation;
        self
    }

    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }
}
