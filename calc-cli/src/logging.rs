//! `tracing` setup for the `calc` binary.
//!
//! Events go to stderr, so stdout carries only command output. With
//! `--log-file` the same lines are also appended, uncolored, to that file.

use std::fmt::{self, Display};
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use chrono::Local;
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::{DefaultFields, FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::{self as tracing_fmt, FmtContext};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter used when neither `--log-level` nor `RUST_LOG` is given.
pub const DEFAULT_FILTER: &str = "warn";

const TIMESTAMP: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

// ─── line format ─────────────────────────────────────────────────────────────

/// `<local time> <LEVEL> <file:line> <message> <fields>`, one event per line.
struct LineFormat;

fn level_style(level: Level) -> &'static str {
    match level {
        Level::ERROR => "1;31",
        Level::WARN => "1;33",
        Level::INFO => "1;32",
        Level::DEBUG => "1;34",
        Level::TRACE => "1;35",
    }
}

/// Writes `text` wrapped in an SGR escape when the writer takes color.
fn styled(
    writer: &mut Writer<'_>,
    style: &str,
    text: impl Display,
) -> fmt::Result {
    if writer.has_ansi_escapes() {
        write!(writer, "\x1b[{style}m{text}\x1b[0m")
    } else {
        write!(writer, "{text}")
    }
}

/// Source location with everything up to the crate's `src/` dropped.
fn location(meta: &Metadata<'_>) -> Option<String> {
    let file = meta.file()?;
    let line = meta.line()?;
    let short = file
        .rsplit_once("src/")
        .or_else(|| file.rsplit_once("src\\"))
        .map_or(file, |(_, rest)| rest);
    Some(format!("{short}:{line}"))
}

impl<S, N> FormatEvent<S, N> for LineFormat
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
        let meta = event.metadata();

        styled(&mut writer, "2", Local::now().format(TIMESTAMP))?;
        writer.write_char(' ')?;
        styled(&mut writer, level_style(*meta.level()), format_args!("{:>5}", meta.level()))?;
        writer.write_char(' ')?;
        if let Some(location) = location(meta) {
            styled(&mut writer, "36", location)?;
            writer.write_char(' ')?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// ─── setup ───────────────────────────────────────────────────────────────────

type FileLayer<S> = tracing_fmt::Layer<S, DefaultFields, LineFormat, Mutex<File>>;

/// Builds the global filter.
///
/// An explicit `level` wins and must parse: a bare level (`"debug"`) or any
/// EnvFilter directive (`"calc_core=debug,warn"`). Without one, `RUST_LOG`
/// is used when it parses, and [`DEFAULT_FILTER`] otherwise.
pub fn make_filter(level: Option<&str>) -> Result<EnvFilter> {
    match level {
        Some(level) => {
            EnvFilter::try_new(level).map_err(|e| anyhow!("invalid log level '{level}': {e}"))
        }
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Opens `path` for appending, creating it if needed. The directory must
/// already exist.
pub fn open_log_file(path: &Path) -> Result<File> {
    File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))
}

fn file_layer<S>(file: File) -> FileLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    tracing_fmt::layer()
        .event_format(LineFormat)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
}

/// Installs the global subscriber. Call once at startup.
///
/// Stderr output is colored only when stderr is a terminal. When `log_file`
/// is given it is opened before anything is installed, so a bad path fails
/// the command up front.
pub fn init_logging(
    level: Option<&str>,
    log_file: Option<&Path>,
) -> Result<()> {
    let filter = make_filter(level)?;
    let file = log_file.map(open_log_file).transpose()?;

    let stderr_layer = tracing_fmt::layer()
        .event_format(LineFormat)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file.map(file_layer))
        .try_init()
        .map_err(|e| anyhow!("logging already initialized: {e}"))
}
