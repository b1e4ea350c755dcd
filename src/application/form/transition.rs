//! Delayed, cancellable single-shot action.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Owns at most one pending delayed action.
///
/// The action runs on a spawned tokio task after the delay. Scheduling a new
/// action aborts the pending one, and dropping the controller aborts it too,
/// so an action never outlives the scope that scheduled it.
#[derive(Debug, Default)]
pub struct TransitionController {
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl TransitionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `action` once after `delay`, replacing any pending action.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, delay: Duration, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let deadline = tokio::time::Instant::now() + delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            action();
        });

        if let Some(previous) = self.slot().replace(handle) {
            previous.abort();
            tracing::debug!("Replaced pending transition");
        }
    }

    /// Aborts the pending action, if any.
    ///
    /// Returns true if an action was still waiting to run.
    pub fn cancel(&self) -> bool {
        match self.slot().take() {
            Some(handle) => {
                let was_pending = !handle.is_finished();
                handle.abort();
                was_pending
            }
            None => false,
        }
    }

    /// Returns true while a scheduled action has not yet run.
    pub fn is_pending(&self) -> bool {
        self.slot()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn slot(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for TransitionController {
    fn drop(&mut self) {
        if self.cancel() {
            tracing::debug!("Pending transition cancelled on teardown");
        }
    }
}
