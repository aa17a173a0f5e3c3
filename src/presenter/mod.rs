//! Console rendering of signal events.
//!
//! The presenter holds no signal logic: it turns each [`SignalEvent`] into
//! one output line, either a tab-separated human line
//! (`1:05\tStop - Go`) or a JSON object per line.

use crate::controller::SignalEvent;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Column header printed when the run starts.
pub const HEADER: &str = "Time\tA - B Lights";

const RULE: &str = "-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=";

/// How events are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `H:MM:SS<TAB>A - B` lines.
    #[default]
    Human,
    /// One JSON object per line.
    Json,
}

/// Format elapsed seconds as `M:SS`, or `H:MM:SS` from one hour on.
///
/// Each component is floored; negative or non-finite input renders as `0:00`.
///
/// ```rust
/// use crossway::presenter::format_time;
///
/// assert_eq!(format_time(0.0), "0:00");
/// assert_eq!(format_time(61.9), "1:01");
/// assert_eq!(format_time(3725.5), "1:02:05");
/// ```
pub fn format_time(secs: f64) -> String {
    let total = if secs.is_finite() && secs > 0.0 {
        secs.floor() as u64
    } else {
        0
    };
    let (h, m, s) = (total / 3600, total % 3600 / 60, total % 60);

    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m}:{s:02}")
    }
}

/// The human-readable line for one event.
pub fn format_line(event: &SignalEvent) -> String {
    format!(
        "{}\t{} - {}",
        format_time(event.elapsed_secs),
        event.colours.axis_a,
        event.colours.axis_b
    )
}

/// Writes events to a sink in the chosen format.
pub struct ConsolePresenter<W: Write + Send> {
    format: OutputFormat,
    writer: Mutex<W>,
}

impl ConsolePresenter<io::Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(format, io::stdout())
    }
}

impl<W: Write + Send> ConsolePresenter<W> {
    pub fn new(format: OutputFormat, writer: W) -> Self {
        Self {
            format,
            writer: Mutex::new(writer),
        }
    }

    /// Title banner shown before the first keypress. Human format only.
    pub fn banner(&self, color: bool) -> io::Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }
        let title = if color {
            "\x1b[31mTraffic \x1b[33mSignal \x1b[32mController\x1b[0m"
        } else {
            "Traffic Signal Controller"
        };

        let mut out = self.lock();
        writeln!(out, "{RULE}")?;
        writeln!(out, "               {title}")?;
        writeln!(out, "  Press Enter to start, press Enter again to stop")?;
        writeln!(out, "{RULE}")?;
        writeln!(out)?;
        out.flush()
    }

    /// Column header. Human format only.
    pub fn header(&self) -> io::Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }
        let mut out = self.lock();
        writeln!(out, "{HEADER}")?;
        out.flush()
    }

    pub fn present(&self, event: &SignalEvent) -> io::Result<()> {
        let mut out = self.lock();
        match self.format {
            OutputFormat::Human => writeln!(out, "{}", format_line(event))?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, event)?;
                writeln!(out)?;
            }
        }
        out.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, W> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
