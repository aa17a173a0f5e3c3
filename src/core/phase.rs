//! The four junction phases and their transition table.
//!
//! Axis-A and Axis-B are coupled: in every phase exactly one axis shows
//! [`Colour::Go`] or [`Colour::Caution`] while the other shows
//! [`Colour::Stop`].
//!
//! | Phase | Axis-A  | Axis-B  | Dwell    |
//! |-------|---------|---------|----------|
//! | P1    | Stop    | Go      | standard |
//! | P2    | Stop    | Caution | caution  |
//! | P3    | Go      | Stop    | standard |
//! | P4    | Caution | Stop    | caution  |

use super::state::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Colour shown by one axis.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Colour {
    Stop,
    Caution,
    Go,
}

impl Colour {
    /// Whether traffic on this axis may be moving.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Go | Self::Caution)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stop => "Stop",
            Self::Caution => "Caution",
            Self::Go => "Go",
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colours of both axes at one instant.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Colours {
    pub axis_a: Colour,
    pub axis_b: Colour,
}

impl Colours {
    /// True when exactly one axis is open and the other shows Stop.
    pub fn is_exclusive(&self) -> bool {
        self.axis_a.is_open() != self.axis_b.is_open()
    }
}

/// Which configured dwell a phase holds for.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum DwellKind {
    /// Go phases.
    Standard,
    /// Caution phases.
    Caution,
}

impl fmt::Display for DwellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => f.write_str("standard"),
            Self::Caution => f.write_str("caution"),
        }
    }
}

/// One of the four fixed phases of the junction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Axis-A Stop, Axis-B Go.
    #[default]
    P1,
    /// Axis-A Stop, Axis-B Caution.
    P2,
    /// Axis-A Go, Axis-B Stop.
    P3,
    /// Axis-A Caution, Axis-B Stop.
    P4,
}

impl Phase {
    /// All phases in cycle order.
    pub const ALL: [Phase; 4] = [Phase::P1, Phase::P2, Phase::P3, Phase::P4];

    pub fn colours(&self) -> Colours {
        use Colour::{Caution, Go, Stop};

        let (axis_a, axis_b) = match self {
            Self::P1 => (Stop, Go),
            Self::P2 => (Stop, Caution),
            Self::P3 => (Go, Stop),
            Self::P4 => (Caution, Stop),
        };
        Colours { axis_a, axis_b }
    }

    pub fn dwell_kind(&self) -> DwellKind {
        match self {
            Self::P1 | Self::P3 => DwellKind::Standard,
            Self::P2 | Self::P4 => DwellKind::Caution,
        }
    }
}

impl State for Phase {
    fn name(&self) -> &'static str {
        match self {
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P3 => "P3",
            Self::P4 => "P4",
        }
    }

    fn next(&self) -> Self {
        match self {
            Self::P1 => Self::P2,
            Self::P2 => Self::P3,
            Self::P3 => Self::P4,
            Self::P4 => Self::P1,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
