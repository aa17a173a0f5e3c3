//! Builder for constructing signal controllers.

use crate::config::{ConfigError, DwellConfig};
use crate::controller::SignalController;
use std::time::Duration;

/// Builder for [`SignalController`] with a fluent API.
///
/// Unset dwells fall back to the defaults (300 000 ms standard, 30 000 ms
/// caution). Values are only checked in [`build`](Self::build), so every
/// problem is reported at once.
#[derive(Clone, Debug, Default)]
pub struct SignalControllerBuilder {
    standard_ms: Option<f64>,
    caution_ms: Option<f64>,
}

impl SignalControllerBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dwell for the Go phases, in milliseconds.
    pub fn standard_dwell_ms(mut self, ms: f64) -> Self {
        self.standard_ms = Some(ms);
        self
    }

    /// Dwell for the Caution phases, in milliseconds.
    pub fn caution_dwell_ms(mut self, ms: f64) -> Self {
        self.caution_ms = Some(ms);
        self
    }

    pub fn standard_dwell(self, dwell: Duration) -> Self {
        self.standard_dwell_ms(dwell.as_secs_f64() * 1000.0)
    }

    pub fn caution_dwell(self, dwell: Duration) -> Self {
        self.caution_dwell_ms(dwell.as_secs_f64() * 1000.0)
    }

    /// Build the controller.
    /// Returns an error if any supplied dwell is invalid.
    pub fn build(self) -> Result<SignalController, ConfigError> {
        let config = DwellConfig::new(self.standard_ms, self.caution_ms)?;
        Ok(SignalController::new(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DwellViolation;
    use crate::core::{DwellKind, Phase};

    #[test]
    fn builder_without_values_uses_defaults() {
        let controller = SignalControllerBuilder::new().build().unwrap();

        assert_eq!(controller.standard_dwell(), Duration::from_millis(300_000));
        assert_eq!(controller.caution_dwell(), Duration::from_millis(30_000));
        assert_eq!(controller.phase(), Phase::P1);
    }

    #[test]
    fn fluent_api_builds_controller() {
        let controller = SignalControllerBuilder::new()
            .standard_dwell_ms(1000.0)
            .caution_dwell(Duration::from_millis(500))
            .build()
            .unwrap();

        assert_eq!(controller.standard_dwell(), Duration::from_secs(1));
        assert_eq!(controller.caution_dwell(), Duration::from_millis(500));
    }

    #[test]
    fn builder_reports_all_invalid_values() {
        let result = SignalControllerBuilder::new()
            .standard_dwell_ms(f64::NAN)
            .caution_dwell_ms(-500.0)
            .build();

        let Err(ConfigError::InvalidConfiguration(violations)) = result else {
            panic!("expected InvalidConfiguration");
        };
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].kind(), DwellKind::Standard);
        assert!(matches!(violations[1], DwellViolation::NotPositive { .. }));
    }

    #[test]
    fn zero_duration_is_rejected() {
        let result = SignalControllerBuilder::new()
            .standard_dwell(Duration::ZERO)
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidConfiguration(_))));
    }
}
