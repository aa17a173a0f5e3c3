//! Configuration error types.

use crate::core::DwellKind;
use thiserror::Error;

/// A single problem with one supplied dwell duration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DwellViolation {
    #[error("{kind} dwell is not a number: {input:?}")]
    NotANumber { kind: DwellKind, input: String },

    #[error("{kind} dwell must be finite (got {value})")]
    NotFinite { kind: DwellKind, value: f64 },

    #[error("{kind} dwell must be positive (got {value} ms)")]
    NotPositive { kind: DwellKind, value: f64 },

    #[error("{kind} dwell of {value} ms is below the 1 µs timer resolution")]
    BelowResolution { kind: DwellKind, value: f64 },

    #[error("{kind} dwell of {value} ms exceeds the {max_ms} ms maximum")]
    TooLong {
        kind: DwellKind,
        value: f64,
        max_ms: u64,
    },
}

impl DwellViolation {
    /// Which dwell the violation refers to.
    pub fn kind(&self) -> DwellKind {
        match self {
            Self::NotANumber { kind, .. }
            | Self::NotFinite { kind, .. }
            | Self::NotPositive { kind, .. }
            | Self::BelowResolution { kind, .. }
            | Self::TooLong { kind, .. } => *kind,
        }
    }
}

/// Errors raised while constructing a signal controller.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// One or both dwell durations were rejected. Every violation found is
    /// listed, not only the first.
    #[error(
        "Invalid configuration: {}",
        .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
    )]
    InvalidConfiguration(Vec<DwellViolation>),
}

impl ConfigError {
    pub fn violations(&self) -> &[DwellViolation] {
        match self {
            Self::InvalidConfiguration(violations) => violations,
        }
    }
}
