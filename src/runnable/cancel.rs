use std::sync::{Arc, OnceLock};
use std::thread;
use std::time::Duration;

use super::RunError;

/// Cooperative cancellation signal polled by the interpreter.
///
/// Clones share the same signal. Once signaled it stays signaled, and the
/// first reason given is the one reported.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    reason: Arc<OnceLock<String>>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal cancellation. Has no effect if already signaled.
    pub fn cancel(&self, reason: impl Into<String>) {
        let _ = self.reason.set(reason.into());
    }

    /// Signal cancellation from a background thread once `timeout` elapses.
    ///
    /// The thread is detached and sleeps for the whole `timeout` even if the
    /// run finishes first; it cannot be stopped early. Signaling a token after
    /// its run is over is harmless, but callers starting many short runs should
    /// spawn their own timer instead.
    pub fn cancel_after(&self, timeout: Duration) {
        let token = self.clone();

        thread::spawn(move || {
            thread::sleep(timeout);
            token.cancel(format!("timed out after {}ms", timeout.as_millis()));
        });
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.reason.get().is_some()
    }

    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.reason.get().map(String::as_str)
    }

    /// Fail with `RunError::Cancelled` if the signal has been raised.
    pub(crate) fn check(&self) -> Result<(), RunError> {
        match self.reason.get() {
            Some(reason) => Err(RunError::Cancelled {
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}
