//! Subscriber registry for phase-change notifications.

use super::event::SignalEvent;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{trace, warn};

/// Callback invoked with every [`SignalEvent`].
pub type Handler = Arc<dyn Fn(&SignalEvent) + Send + Sync>;

/// Token returned by `on_change`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owned list of handlers. All registered handlers receive every event.
#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: AtomicU64,
    handlers: Mutex<Vec<(SubscriptionId, Handler)>>,
}

impl Subscribers {
    fn lock(&self) -> MutexGuard<'_, Vec<(SubscriptionId, Handler)>> {
        self.handlers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn add(&self, handler: Handler) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock().push((id, handler));
        id
    }

    pub(crate) fn remove(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.lock();
        let before = handlers.len();
        handlers.retain(|(existing, _)| *existing != id);
        handlers.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.lock().len()
    }

    /// Deliver `event` to every handler, returning how many returned
    /// normally.
    ///
    /// Handlers run on a snapshot taken outside the lock, so a handler may
    /// subscribe or unsubscribe without deadlocking. A panicking handler is
    /// logged and skipped; the remaining handlers still receive the event.
    pub(crate) fn notify(&self, event: &SignalEvent) -> usize {
        let snapshot: Vec<(SubscriptionId, Handler)> = self
            .lock()
            .iter()
            .map(|(id, handler)| (*id, Arc::clone(handler)))
            .collect();

        let mut delivered = 0;
        for (id, handler) in &snapshot {
            match panic::catch_unwind(AssertUnwindSafe(|| handler(event))) {
                Ok(()) => delivered += 1,
                Err(_) => warn!(?id, phase = %event.phase, "subscriber panicked"),
            }
        }
        trace!(phase = %event.phase, delivered, "notified subscribers");
        delivered
    }
}
