//! Structured logging setup for the `crossway` binary.

mod logging;

pub use logging::{init_logging, verbosity_to_directive, ColorChoice, LogFormat};
