//! Notification payload delivered on every phase change.

use crate::core::{Colours, Phase};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of one phase change, as seen by subscribers.
///
/// `elapsed_secs` is the simulated time since `start()` in fractional
/// seconds, truncated to whole microseconds. `timestamp` is the wall-clock
/// instant the event was built and is informational only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignalEvent {
    pub elapsed_secs: f64,
    pub phase: Phase,
    pub colours: Colours,
    pub timestamp: DateTime<Utc>,
}

impl SignalEvent {
    pub(crate) fn new(phase: Phase, elapsed: Duration) -> Self {
        Self {
            elapsed_secs: truncate_to_micros(elapsed).as_secs_f64(),
            phase,
            colours: phase.colours(),
            timestamp: Utc::now(),
        }
    }

    /// Elapsed time as a `Duration`.
    pub fn elapsed(&self) -> Duration {
        Duration::from_secs_f64(self.elapsed_secs)
    }
}

pub(crate) fn truncate_to_micros(duration: Duration) -> Duration {
    Duration::from_micros(duration.as_micros() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Colour;

    #[test]
    fn event_carries_phase_colours() {
        let event = SignalEvent::new(Phase::P3, Duration::from_millis(1500));
        assert_eq!(event.elapsed_secs, 1.5);
        assert_eq!(event.colours.axis_a, Colour::Go);
        assert_eq!(event.colours.axis_b, Colour::Stop);
    }

    #[test]
    fn elapsed_is_truncated_not_rounded() {
        let event = SignalEvent::new(Phase::P1, Duration::from_nanos(1_500_999));
        assert_eq!(event.elapsed_secs, 0.0015);
    }

    #[test]
    fn elapsed_converts_back_to_duration() {
        let event = SignalEvent::new(Phase::P2, Duration::from_millis(2500));
        assert_eq!(event.elapsed(), Duration::from_millis(2500));
    }

    #[test]
    fn event_serializes_to_json() {
        let event = SignalEvent::new(Phase::P2, Duration::from_secs(1));
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["elapsed_secs"], 1.0);
        assert_eq!(json["phase"], "P2");
        assert_eq!(json["colours"]["axis_a"], "Stop");
        assert_eq!(json["colours"]["axis_b"], "Caution");
    }
}
