//! Verbosity-gated diagnostics on stderr.
//!
//! The library reports through `tracing`; nothing is printed until the binary
//! installs a subscriber with `init`. Stdout stays reserved for result paths.

use std::fmt;
use std::io::IsTerminal;

use colored::Colorize;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::registry::LookupSpan;

/// Map the `-v` count onto a level filter. Skipped entries are warnings, so they
/// show up from a single `-v` onwards.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::OFF,
        1 => LevelFilter::WARN,
        2 => LevelFilter::INFO,
        3 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Event format: `** message key=value ...`.
pub struct DiagnosticFormat {
    color: bool,
}

impl DiagnosticFormat {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn prefix(&self, level: &Level) -> String {
        if !self.color {
            return "**".to_string();
        }
        let p = "**";
        match *level {
            Level::ERROR => p.red().bold().to_string(),
            Level::WARN => p.yellow().bold().to_string(),
            Level::INFO => p.green().to_string(),
            _ => p.dimmed().to_string(),
        }
    }
}

impl<S, N> FormatEvent<S, N> for DiagnosticFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(writer, "{} ", self.prefix(event.metadata().level()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Install the stderr subscriber for the given verbosity.
///
/// Calling this more than once is harmless; only the first call takes effect.
pub fn init(verbosity: u8) {
    let color = std::io::stderr().is_terminal();
    let _ = tracing_subscriber::fmt()
        .with_max_level(level_for(verbosity))
        .with_writer(std::io::stderr)
        .with_ansi(color)
        .event_format(DiagnosticFormat::new(color))
        .try_init();
}
