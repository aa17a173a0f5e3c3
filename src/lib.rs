//! Crossway: a timed two-phase road-junction signal
//!
//! Two orthogonal approaches, Axis-A and Axis-B, share one junction. In
//! every phase exactly one axis shows Go or Caution while the other shows
//! Stop, and the controller walks the four phases in a fixed cycle, holding
//! each for a configured dwell.
//!
//! # Core Concepts
//!
//! - **Phase**: the four colour pairs and their successor, via the `State` trait
//! - **DwellConfig**: validated standard and caution durations
//! - **SignalController**: timer-driven cycling with subscriber notification
//! - **Presenter / driver**: console output and the start/stop toggle used
//!   by the `crossway` binary
//!
//! # Example
//!
//! ```rust
//! use crossway::core::{Colour, Phase, State};
//!
//! let phase = Phase::P1;
//! assert_eq!(phase.colours().axis_b, Colour::Go);
//! assert_eq!(phase.next(), Phase::P2);
//! ```

pub mod builder;
pub mod cli;
pub mod config;
pub mod controller;
pub mod core;
pub mod driver;
pub mod observability;
pub mod presenter;

// Re-export commonly used types
pub use builder::SignalControllerBuilder;
pub use config::{ConfigError, DwellConfig};
pub use controller::{SignalController, SignalEvent, SubscriptionId};
pub use crate::core::{Colour, Colours, DwellKind, Phase, State};
