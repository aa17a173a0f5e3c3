//! The timed junction controller.
//!
//! [`SignalController`] owns the current phase, the elapsed simulated time
//! and the subscriber list. `start()` announces the initial phase and spawns
//! a single task that keeps cycling P1 → P2 → P3 → P4 → P1 until `stop()`
//! is called or the controller is dropped.
//!
//! # Example
//!
//! ```rust
//! use crossway::SignalController;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let controller = SignalController::builder()
//!     .standard_dwell_ms(1000.0)
//!     .caution_dwell_ms(500.0)
//!     .build()
//!     .unwrap();
//!
//! controller.on_change(|event| {
//!     println!("{} - {}", event.colours.axis_a, event.colours.axis_b);
//! });
//!
//! controller.start();
//! assert!(controller.is_running());
//! controller.stop();
//! # }
//! ```
//!
//! # Elapsed time
//!
//! Transitions are armed against nominal deadlines (`previous deadline +
//! dwell`) and the reported elapsed time is the deadline's offset from the
//! start instant. Scheduling jitter therefore delays delivery but never
//! accumulates into the reported times.

mod cycle;
mod event;
mod subscribers;

pub use event::SignalEvent;
pub use subscribers::{Handler, SubscriptionId};

use crate::builder::SignalControllerBuilder;
use crate::config::DwellConfig;
use crate::core::Phase;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use subscribers::Subscribers;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Two-axis traffic signal driven by timers.
pub struct SignalController {
    shared: Arc<Shared>,
}

/// State shared with the cycle task.
pub(crate) struct Shared {
    config: DwellConfig,
    cycle: Mutex<CycleState>,
    subscribers: Subscribers,
}

struct CycleState {
    phase: Phase,
    elapsed: Duration,
    started_at: Option<Instant>,
    /// Set once the P1 event has actually been delivered.
    announced: bool,
    runner: Option<CycleRunner>,
}

struct CycleRunner {
    cancel: CancellationToken,
    _task: JoinHandle<()>,
}

impl Shared {
    fn lock_cycle(&self) -> MutexGuard<'_, CycleState> {
        self.cycle.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SignalController {
    /// Create a controller in phase P1 at time zero. Nothing is scheduled
    /// and no subscriber is notified until [`start`](Self::start).
    pub fn new(config: DwellConfig) -> Self {
        debug!(
            standard_ms = config.standard().as_secs_f64() * 1000.0,
            caution_ms = config.caution().as_secs_f64() * 1000.0,
            "signal controller created"
        );
        Self {
            shared: Arc::new(Shared {
                config,
                cycle: Mutex::new(CycleState {
                    phase: Phase::P1,
                    elapsed: Duration::ZERO,
                    started_at: None,
                    announced: false,
                    runner: None,
                }),
                subscribers: Subscribers::default(),
            }),
        }
    }

    /// Fluent builder validating millisecond dwell values.
    pub fn builder() -> SignalControllerBuilder {
        SignalControllerBuilder::new()
    }

    pub fn config(&self) -> DwellConfig {
        self.shared.config
    }

    pub fn standard_dwell(&self) -> Duration {
        self.shared.config.standard()
    }

    pub fn caution_dwell(&self) -> Duration {
        self.shared.config.caution()
    }

    pub fn phase(&self) -> Phase {
        self.shared.lock_cycle().phase
    }

    /// Elapsed simulated time at the most recent transition.
    pub fn elapsed(&self) -> Duration {
        self.shared.lock_cycle().elapsed
    }

    /// Whether a transition is currently scheduled.
    pub fn is_running(&self) -> bool {
        self.shared.lock_cycle().runner.is_some()
    }

    pub fn subscriber_count(&self) -> usize {
        self.shared.subscribers.len()
    }

    /// Register a handler called with every phase change, including the
    /// initial announcement made by `start()`.
    pub fn on_change<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&SignalEvent) + Send + Sync + 'static,
    {
        let id = self.shared.subscribers.add(Arc::new(handler));
        debug!(?id, "subscriber registered");
        id
    }

    /// Remove a handler. Returns `false` if it was not registered.
    ///
    /// Removing every handler does not stop the cycle; call
    /// [`stop`](Self::stop) for that.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = self.shared.subscribers.remove(id);
        debug!(?id, removed, "subscriber removed");
        removed
    }

    /// Begin cycling.
    ///
    /// Until the P1 event (elapsed zero) has been delivered, each call
    /// records a fresh start instant and delivers it on the next scheduler
    /// tick. Once announced, calling this again after a
    /// [`stop`](Self::stop) re-arms the current phase's full dwell without
    /// announcing again. While running it does nothing.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn start(&self) {
        let mut cycle = self.shared.lock_cycle();
        if cycle.runner.is_some() {
            debug!("start ignored; cycle already running");
            return;
        }

        let now = Instant::now();
        let announce = !cycle.announced;
        if announce {
            cycle.started_at = Some(now);
        }
        let deadline = now + self.shared.config.dwell_for(cycle.phase.dwell_kind());

        let cancel = CancellationToken::new();
        let task = tokio::spawn(cycle::run(
            Arc::clone(&self.shared),
            cancel.clone(),
            announce,
            deadline,
        ));
        cycle.runner = Some(CycleRunner {
            cancel,
            _task: task,
        });

        info!(phase = %cycle.phase, resumed = !announce, "signal cycle started");
    }

    /// Cancel the pending transition. Returns `false` if nothing was running.
    ///
    /// Phase and elapsed time are kept, so a later `start()` resumes.
    pub fn stop(&self) -> bool {
        let mut cycle = self.shared.lock_cycle();
        match cycle.runner.take() {
            Some(runner) => {
                runner.cancel.cancel();
                info!(phase = %cycle.phase, "signal cycle stopped");
                true
            }
            None => false,
        }
    }
}

impl Default for SignalController {
    fn default() -> Self {
        Self::new(DwellConfig::default())
    }
}

impl Drop for SignalController {
    fn drop(&mut self) {
        if let Some(runner) = self.shared.lock_cycle().runner.take() {
            runner.cancel.cancel();
        }
    }
}
