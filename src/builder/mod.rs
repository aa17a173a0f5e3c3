//! Builder API for ergonomic controller construction.

pub mod controller;

pub use controller::SignalControllerBuilder;
