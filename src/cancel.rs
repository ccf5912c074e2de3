//! Cooperative cancellation for running searches.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Message reported when a search is aborted without an explicit reason.
pub const DEFAULT_ABORT_REASON: &str = "wallet search aborted";

/// A cheaply clonable cancellation signal.
///
/// The search never mutates the token; it only observes it. Workers poll it
/// once per loop iteration, the coordinator polls it while waiting for
/// results, so cancellation takes effect at that granularity — a candidate
/// generation already in flight is allowed to finish.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    cancelled: AtomicBool,
    reason: Mutex<Option<String>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Triggers cancellation with the default reason.
    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::SeqCst);
    }

    /// Triggers cancellation carrying a reason for the caller.
    ///
    /// The first stored reason wins; later calls only keep the token
    /// triggered.
    pub fn cancel_with_reason(&self, reason: impl Into<String>) {
        if let Ok(mut slot) = self.inner.reason.lock() {
            slot.get_or_insert_with(|| reason.into());
        }
        self.inner.cancelled.store(true, Ordering::SeqCst);
    }

    /// Returns true once cancellation has been triggered.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }

    /// Returns the carried reason, or the default abort message.
    pub fn reason(&self) -> String {
        self.inner
            .reason
            .lock()
            .ok()
            .and_then(|slot| slot.clone())
            .unwrap_or_else(|| DEFAULT_ABORT_REASON.to_string())
    }
}
