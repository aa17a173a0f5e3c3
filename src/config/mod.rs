//! Dwell-duration configuration and its validation.
//!
//! Both dwells are checked independently and every problem is reported in a
//! single [`ConfigError::InvalidConfiguration`], using Stillwater's
//! `Validation` to accumulate failures instead of stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use crossway::config::DwellConfig;
//! use std::time::Duration;
//!
//! let config = DwellConfig::new(Some(1000.0), None).unwrap();
//! assert_eq!(config.standard(), Duration::from_secs(1));
//! assert_eq!(config.caution(), Duration::from_secs(30));
//!
//! assert!(DwellConfig::parse(Some("blah"), Some("whoa")).is_err());
//! ```

pub mod error;

pub use error::{ConfigError, DwellViolation};

use crate::core::DwellKind;
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Default standard (Go phase) dwell in milliseconds.
pub const DEFAULT_STANDARD_MS: f64 = 300_000.0;

/// Default caution phase dwell in milliseconds.
pub const DEFAULT_CAUTION_MS: f64 = 30_000.0;

/// Longest accepted dwell: one day.
pub const MAX_DWELL_MS: u64 = 24 * 60 * 60 * 1000;

type DwellCheck = Validation<(), NonEmptyVec<DwellViolation>>;

/// Validated, immutable dwell durations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DwellConfig {
    standard: Duration,
    caution: Duration,
}

impl DwellConfig {
    /// Build from optional millisecond values; `None` selects the default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] if a supplied value is
    /// NaN, infinite, zero or negative, below 1 µs, or longer than a day.
    pub fn new(standard_ms: Option<f64>, caution_ms: Option<f64>) -> Result<Self, ConfigError> {
        Self::validate(Ok(standard_ms), Ok(caution_ms))
    }

    /// Build from optional textual millisecond values, as read from the
    /// command line or the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] if a supplied value is
    /// not a number, or fails the checks of [`DwellConfig::new`].
    pub fn parse(standard: Option<&str>, caution: Option<&str>) -> Result<Self, ConfigError> {
        Self::validate(
            parse_ms(DwellKind::Standard, standard),
            parse_ms(DwellKind::Caution, caution),
        )
    }

    /// Build from already-typed durations.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] for a zero duration or
    /// one longer than a day.
    pub fn from_durations(standard: Duration, caution: Duration) -> Result<Self, ConfigError> {
        Self::new(Some(as_ms(standard)), Some(as_ms(caution)))
    }

    pub fn standard(&self) -> Duration {
        self.standard
    }

    pub fn caution(&self) -> Duration {
        self.caution
    }

    /// Dwell for the given kind of phase.
    pub fn dwell_for(&self, kind: DwellKind) -> Duration {
        match kind {
            DwellKind::Standard => self.standard,
            DwellKind::Caution => self.caution,
        }
    }

    fn validate(
        standard: Result<Option<f64>, DwellViolation>,
        caution: Result<Option<f64>, DwellViolation>,
    ) -> Result<Self, ConfigError> {
        let checks = vec![
            check_input(DwellKind::Standard, &standard),
            check_input(DwellKind::Caution, &caution),
        ];

        match Validation::all_vec(checks).map(|_| ()) {
            Validation::Success(()) => Ok(Self {
                standard: resolve(standard, DEFAULT_STANDARD_MS),
                caution: resolve(caution, DEFAULT_CAUTION_MS),
            }),
            Validation::Failure(errors) => Err(ConfigError::InvalidConfiguration(
                errors.iter().cloned().collect(),
            )),
        }
    }
}

impl Default for DwellConfig {
    fn default() -> Self {
        Self {
            standard: to_duration(DEFAULT_STANDARD_MS),
            caution: to_duration(DEFAULT_CAUTION_MS),
        }
    }
}

fn parse_ms(kind: DwellKind, input: Option<&str>) -> Result<Option<f64>, DwellViolation> {
    input
        .map(|raw| {
            raw.trim()
                .parse::<f64>()
                .map_err(|_| DwellViolation::NotANumber {
                    kind,
                    input: raw.to_string(),
                })
        })
        .transpose()
}

fn check_input(kind: DwellKind, input: &Result<Option<f64>, DwellViolation>) -> DwellCheck {
    match input {
        Err(violation) => Validation::fail(violation.clone()),
        Ok(None) => Validation::success(()),
        Ok(Some(value)) => check_ms(kind, *value),
    }
}

fn check_ms(kind: DwellKind, value: f64) -> DwellCheck {
    if !value.is_finite() {
        Validation::fail(DwellViolation::NotFinite { kind, value })
    } else if value <= 0.0 {
        Validation::fail(DwellViolation::NotPositive { kind, value })
    } else if value > MAX_DWELL_MS as f64 {
        Validation::fail(DwellViolation::TooLong {
            kind,
            value,
            max_ms: MAX_DWELL_MS,
        })
    } else if to_duration(value).is_zero() {
        Validation::fail(DwellViolation::BelowResolution { kind, value })
    } else {
        Validation::success(())
    }
}

// Only called once the input has passed `check_input`.
fn resolve(input: Result<Option<f64>, DwellViolation>, default_ms: f64) -> Duration {
    to_duration(input.ok().flatten().unwrap_or(default_ms))
}

fn to_duration(ms: f64) -> Duration {
    Duration::from_micros((ms * 1000.0).round() as u64)
}

fn as_ms(duration: Duration) -> f64 {
    duration.as_micros() as f64 / 1000.0
}
