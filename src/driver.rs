//! Single-toggle driver: the first activation starts the controller, the
//! second ends the run.
//!
//! An activation is a line on the input (Enter), the end of input, or
//! Ctrl-C. Ending input or interrupting before the first line exits without
//! starting.

use crate::controller::SignalController;
use crate::presenter::ConsolePresenter;
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::info;

/// What woke the driver up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Line,
    EndOfInput,
    Interrupt,
}

/// Run one start/stop session against `input`.
///
/// # Errors
///
/// Returns an I/O error if reading input, installing the Ctrl-C handler or
/// writing the header fails.
pub async fn run<R, W>(
    controller: &SignalController,
    presenter: &ConsolePresenter<W>,
    input: R,
) -> io::Result<Activation>
where
    R: AsyncBufRead + Unpin,
    W: Write + Send,
{
    let mut lines = input.lines();

    let first = next_activation(&mut lines).await?;
    if first != Activation::Line {
        info!(?first, "input ended before the signal was started");
        return Ok(first);
    }

    presenter.header()?;
    controller.start();

    let second = next_activation(&mut lines).await?;
    controller.stop();
    info!(?second, phase = %controller.phase(), "signal run finished");
    Ok(second)
}

async fn next_activation<R>(lines: &mut Lines<R>) -> io::Result<Activation>
where
    R: AsyncBufRead + Unpin,
{
    tokio::select! {
        line = lines.next_line() => Ok(match line? {
            Some(_) => Activation::Line,
            None => Activation::EndOfInput,
        }),
        interrupted = tokio::signal::ctrl_c() => {
            interrupted?;
            Ok(Activation::Interrupt)
        }
    }
}
