//! Session log
//!
//! One line per event, `YYYY/MM/DD HH:MM:SS - <message>`, appended to the log
//! file for the whole run. Warnings and errors carry a `WARNING: ` or
//! `ERROR: ` prefix after the separator.

use chrono::Local;
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{self, FormatEvent, FormatFields};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::{FmtContext, MakeWriter};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Timestamp layout of every log line
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Event formatter producing `YYYY/MM/DD HH:MM:SS - <message>`
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionLogFormat;

impl<S, N> FormatEvent<S, N> for SessionLogFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        write!(writer, "{} - ", Local::now().format(TIMESTAMP_FORMAT))?;

        match *event.metadata().level() {
            Level::ERROR => write!(writer, "ERROR: ")?,
            Level::WARN => write!(writer, "WARNING: ")?,
            _ => {}
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Build the session-log subscriber over any writer
pub fn session_subscriber<W>(make_writer: W, filter: EnvFilter) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_writer(make_writer)
        .with_ansi(false)
        .with_env_filter(filter)
        .event_format(SessionLogFormat)
        .finish()
}

/// Initialize logging to `log_file` (append mode)
///
/// Falls back to stderr if the file cannot be opened. `RUST_LOG` overrides
/// the default `info` level.
pub fn init(log_file: &Path) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (writer, open_error) = match open_log(log_file) {
        Ok(file) => (BoxMakeWriter::new(Mutex::new(file)), None),
        Err(e) => (BoxMakeWriter::new(std::io::stderr), Some(e)),
    };

    // A subscriber may already be installed (e.g. by a test harness)
    let _ = session_subscriber(writer, filter).try_init();

    if let Some(e) = open_error {
        tracing::warn!(
            "could not open log file {}: {}; logging to stderr",
            log_file.display(),
            e
        );
    }
}

fn open_log(log_file: &Path) -> std::io::Result<fs::File> {
    if let Some(parent) = log_file.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(log_file)
}
