// SEA tools - util/log_format.rs
//
// Line formats for the two sinks:
//
//   console: DD-MM-YYYY HH:MM:SS [LEVEL]: message
//   file:    'DD-MM-YYYY HH:MM:SS - SEA_logger - [LEVEL]: message'
//
// The quoting on the file format is asymmetric on purpose; existing log
// readers split on it.

use std::fmt::{self, Write as _};

use chrono::Local;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

use super::constants;

/// Boolean event field that promotes an ERROR record to `CRITICAL`.
///
/// `tracing` has no level above ERROR, so critical records are ERROR events
/// carrying `critical = true`. They pass every sink ERROR passes.
pub const CRITICAL_FIELD: &str = "critical";

/// Display name of a level, using the names the SEA log readers expect.
pub fn level_name(level: &Level, critical: bool) -> &'static str {
    match *level {
        Level::ERROR if critical => "CRITICAL",
        Level::ERROR => "ERROR",
        Level::WARN => "WARNING",
        Level::INFO => "INFO",
        Level::DEBUG => "DEBUG",
        Level::TRACE => "TRACE",
    }
}

/// Event formatter shared by the console and file sinks.
#[derive(Debug, Clone)]
pub struct RecordFormat {
    /// Present only for the file sink.
    logger_name: Option<String>,
    timestamp_format: String,
}

impl RecordFormat {
    /// `<timestamp> [<LEVEL>]: <message>`
    pub fn console() -> Self {
        Self {
            logger_name: None,
            timestamp_format: constants::TIMESTAMP_FORMAT.to_string(),
        }
    }

    /// `'<timestamp> - <logger-name> - [<LEVEL>]: <message>'`
    pub fn file(logger_name: impl Into<String>) -> Self {
        Self {
            logger_name: Some(logger_name.into()),
            timestamp_format: constants::TIMESTAMP_FORMAT.to_string(),
        }
    }

    /// Write one complete line, newline included.
    pub fn write_record(
        &self,
        w: &mut impl fmt::Write,
        timestamp: impl fmt::Display,
        level: &str,
        message: &str,
    ) -> fmt::Result {
        match &self.logger_name {
            Some(name) => writeln!(w, "'{timestamp} - {name} - [{level}]: {message}'"),
            None => writeln!(w, "{timestamp} [{level}]: {message}"),
        }
    }
}

impl<S, N> FormatEvent<S, N> for RecordFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut visitor = RecordVisitor::default();
        event.record(&mut visitor);

        let timestamp = Local::now().format(&self.timestamp_format);
        let level = level_name(event.metadata().level(), visitor.critical);
        self.write_record(&mut writer, timestamp, level, &visitor.into_message())
    }
}

/// Collects the message plus any structured fields, rendered ` key=value`
/// after the message.
#[derive(Debug, Default)]
struct RecordVisitor {
    message: String,
    fields: String,
    critical: bool,
}

impl RecordVisitor {
    fn into_message(mut self) -> String {
        self.message.push_str(&self.fields);
        self.message
    }
}

impl Visit for RecordVisitor {
    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == CRITICAL_FIELD {
            self.critical = value;
        } else {
            self.record_debug(field, &value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            let _ = write!(self.fields, " {}={value}", field.name());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.message = format!("{value:?}"),
            name => {
                let _ = write!(self.fields, " {name}={value:?}");
            }
        }
    }
}
