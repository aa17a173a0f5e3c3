//! Core signal types and transition logic.
//!
//! This module contains the pure part of the controller:
//! - State definitions via the `State` trait
//! - The four junction phases with their colours and dwell kinds
//!
//! Nothing in here touches timers or subscribers.

mod phase;
mod state;

pub use phase::{Colour, Colours, DwellKind, Phase};
pub use state::State;
