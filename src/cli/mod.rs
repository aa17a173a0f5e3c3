//! Command-line interface of the `crossway` binary.

pub mod args;

pub use args::Cli;
