//! `crossway`: console traffic signal simulator.

use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tokio::io::BufReader;
use tracing::{error, warn};

use crossway::cli::Cli;
use crossway::driver;
use crossway::observability::init_logging;
use crossway::presenter::ConsolePresenter;
use crossway::SignalController;

/// Exit code for rejected dwell configuration.
const EXIT_CONFIG: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    let config = match cli.dwell_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    let controller = SignalController::new(config);
    let presenter = Arc::new(ConsolePresenter::stdout(cli.format));
    {
        let presenter = Arc::clone(&presenter);
        controller.on_change(move |event| {
            if let Err(err) = presenter.present(event) {
                warn!(%err, "failed to write signal event");
            }
        });
    }

    if let Err(err) = presenter.banner(cli.color.enabled_for(std::io::stdout().is_terminal())) {
        warn!(%err, "failed to write banner");
    }

    match driver::run(&controller, &*presenter, BufReader::new(tokio::io::stdin())).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "driver failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
