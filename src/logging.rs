use std::fmt;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Pick the filter level from the tool default and the `-v`/`-q` flags.
pub fn level_for(default_level: &str, verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return LEVELS[0];
    }

    let base = LEVELS
        .iter()
        .position(|level| *level == default_level)
        .unwrap_or(1);
    LEVELS[(base + verbose as usize).min(LEVELS.len() - 1)]
}

/// Level names as Python's `logging` spells them.
pub fn level_name(level: &Level) -> &'static str {
    if *level == Level::ERROR {
        "ERROR"
    } else if *level == Level::WARN {
        "WARNING"
    } else if *level == Level::INFO {
        "INFO"
    } else if *level == Level::DEBUG {
        "DEBUG"
    } else {
        "TRACE"
    }
}

/// Writes every event as `[LEVEL] message`.
pub struct BracketedLevel;

impl<S, N> FormatEvent<S, N> for BracketedLevel
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
        write!(writer, "[{}] ", level_name(event.metadata().level()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the flags when set.
pub fn setup_logging(default_level: &str, verbose: u8, quiet: bool) {
    let level = level_for(default_level, verbose, quiet);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(BracketedLevel)
        .init();
}
