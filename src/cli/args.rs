//! CLI argument definitions.

use clap::{ArgAction, Parser};

use crate::config::{ConfigError, DwellConfig};
use crate::observability::{ColorChoice, LogFormat};
use crate::presenter::OutputFormat;

/// Two-phase traffic signal simulator.
///
/// Press Enter to start the signal cycle and Enter again (or Ctrl-C) to stop.
#[derive(Parser, Debug)]
#[command(name = "crossway", author, version, about)]
pub struct Cli {
    /// Dwell of the Go phases in milliseconds [default: 300000].
    #[arg(long, value_name = "MS", env = "CROSSWAY_STANDARD_MS")]
    pub standard_ms: Option<String>,

    /// Dwell of the Caution phases in milliseconds [default: 30000].
    #[arg(long, value_name = "MS", env = "CROSSWAY_CAUTION_MS")]
    pub caution_ms: Option<String>,

    /// Event output format on stdout.
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all logging.
    #[arg(short, long)]
    pub quiet: bool,

    /// Log output format on stderr.
    #[arg(long, value_enum, default_value = "human")]
    pub log_format: LogFormat,

    /// Color output control.
    #[arg(long, value_enum, default_value = "auto", env = "CROSSWAY_COLOR")]
    pub color: ColorChoice,
}

impl Cli {
    /// Validate the dwell arguments.
    ///
    /// Dwells are taken as text so that the library's validation reports
    /// non-numeric input the same way as negative or NaN values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] for any invalid dwell.
    pub fn dwell_config(&self) -> Result<DwellConfig, ConfigError> {
        DwellConfig::parse(self.standard_ms.as_deref(), self.caution_ms.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn defaults_parse() {
        let cli = Cli::try_parse_from(["crossway"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Human);
        assert_eq!(cli.log_format, LogFormat::Human);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn dwell_flags_reach_config() {
        let cli = Cli::try_parse_from(["crossway", "--standard-ms", "1000", "--caution-ms", "500"])
            .unwrap();
        let config = cli.dwell_config().unwrap();
        assert_eq!(config.standard(), Duration::from_secs(1));
        assert_eq!(config.caution(), Duration::from_millis(500));
    }

    #[test]
    fn non_numeric_dwell_is_a_config_error() {
        let cli = Cli::try_parse_from(["crossway", "--standard-ms", "blah"]).unwrap();
        assert!(matches!(
            cli.dwell_config(),
            Err(ConfigError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::try_parse_from(["crossway", "-vvv", "--format", "json"]).unwrap();
        assert_eq!(cli.verbose, 3);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["crossway", "--format", "xml"]).is_err());
    }
}
