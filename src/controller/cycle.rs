//! The self-rearming transition loop.
//!
//! One spawned task per running cycle. Each iteration waits for the current
//! phase's deadline, advances the phase, notifies subscribers, and arms the
//! next deadline from the new phase's dwell. Iteration replaces recursion,
//! so the stack never grows however long the cycle runs.

use super::event::SignalEvent;
use super::Shared;
use crate::core::State;
use std::sync::Arc;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub(super) async fn run(
    shared: Arc<Shared>,
    cancel: CancellationToken,
    announce: bool,
    mut deadline: Instant,
) {
    // First poll happens on a later scheduler tick than `start()`, so
    // handlers registered right after `start()` still see the initial event.
    if announce {
        match shared.initial_event(&cancel) {
            Some(event) => {
                shared.subscribers.notify(&event);
            }
            None => return,
        }
    }

    loop {
        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                debug!("signal cycle cancelled");
                break;
            }
            () = tokio::time::sleep_until(deadline) => {}
        }

        let Some((event, dwell)) = shared.advance(&cancel, deadline) else {
            break;
        };
        shared.subscribers.notify(&event);
        deadline += dwell;
    }
}

impl Shared {
    fn initial_event(&self, cancel: &CancellationToken) -> Option<SignalEvent> {
        let mut cycle = self.lock_cycle();
        if cancel.is_cancelled() {
            return None;
        }
        cycle.announced = true;
        debug!(phase = %cycle.phase, "announcing initial phase");
        Some(SignalEvent::new(cycle.phase, cycle.elapsed))
    }

    /// Move to the successor phase. Returns the event to publish and the
    /// dwell of the phase just entered, or `None` if the cycle was stopped
    /// while this transition was waiting on the lock.
    fn advance(
        &self,
        cancel: &CancellationToken,
        deadline: Instant,
    ) -> Option<(SignalEvent, std::time::Duration)> {
        let mut cycle = self.lock_cycle();
        if cancel.is_cancelled() {
            return None;
        }
        let started_at = cycle.started_at?;

        let from = cycle.phase;
        cycle.phase = from.next();
        cycle.elapsed = deadline.saturating_duration_since(started_at);

        let event = SignalEvent::new(cycle.phase, cycle.elapsed);
        debug!(
            from = %from,
            to = %cycle.phase,
            elapsed_secs = event.elapsed_secs,
            "phase transition"
        );
        Some((event, self.config.dwell_for(cycle.phase.dwell_kind())))
    }
}
