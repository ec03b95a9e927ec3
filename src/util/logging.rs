// SEA tools - util/logging.rs
//
// Two-sink logger shared by every SEA component.
//
//   console  -> stderr, DEBUG and above
//   file     -> <base>/logs/SEA.log, ERROR and above, size-rotated
//
// The logger is built once during startup by `init` (or `create_logger`
// with the defaults). A second installation in the same process is refused
// rather than stacking duplicate sinks. `build_subscriber` gives the same
// subscriber without installing it, for scoped use with
// `tracing::subscriber::with_default`.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;

use super::constants;
use super::error::LoggingError;
use super::log_format::RecordFormat;
use super::rotating_file::{RotatingFile, RotatingFileWriter};

/// Set once a logger has been installed as the global default.
static INSTALLED: AtomicBool = AtomicBool::new(false);

/// Everything needed to build the logger. Defaults reproduce the fixed
/// behaviour the rest of the package relies on.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Directory under which `logs/` is created.
    pub base_dir: PathBuf,
    /// Name rendered in file records.
    pub logger_name: String,
    /// Records below this level reach no sink at all.
    pub level: Level,
    pub console_level: Level,
    pub file_level: Level,
    /// Active file size that triggers rotation.
    pub max_bytes: u64,
    /// Rotated files kept next to the active one.
    pub backup_count: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            logger_name: constants::LOGGER_NAME.to_string(),
            level: constants::DEFAULT_LOGGER_LEVEL,
            console_level: constants::DEFAULT_CONSOLE_LEVEL,
            file_level: constants::DEFAULT_FILE_LEVEL,
            max_bytes: constants::DEFAULT_MAX_LOG_BYTES,
            backup_count: constants::DEFAULT_LOG_BACKUP_COUNT,
        }
    }
}

impl LoggingConfig {
    /// Defaults, rooted at `base_dir`.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ..Self::default()
        }
    }

    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.join(constants::LOG_DIR_NAME)
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir().join(constants::LOG_FILE_NAME)
    }
}

/// Create `<base_dir>/logs` if it does not exist and return its path.
/// An existing directory is not an error.
pub fn ensure_log_dir(base_dir: &Path) -> Result<PathBuf, LoggingError> {
    let log_dir = base_dir.join(constants::LOG_DIR_NAME);
    std::fs::create_dir_all(&log_dir).map_err(|source| LoggingError::CreateLogDir {
        path: log_dir.clone(),
        source,
    })?;
    Ok(log_dir)
}

/// Build the two-sink subscriber without installing it.
///
/// `console` receives the console sink's records; the binary passes
/// `std::io::stderr`. The log directory and active log file are created here,
/// so any filesystem failure surfaces before the subscriber exists.
pub fn build_subscriber<W>(
    config: &LoggingConfig,
    console: W,
) -> Result<impl Subscriber + Send + Sync + 'static, LoggingError>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let log_path = ensure_log_dir(&config.base_dir)?.join(constants::LOG_FILE_NAME);
    let file = RotatingFile::open(&log_path, config.max_bytes, config.backup_count).map_err(
        |source| LoggingError::OpenLogFile {
            path: log_path.clone(),
            source,
        },
    )?;

    let console_layer = tracing_subscriber::fmt::layer()
        .event_format(RecordFormat::console())
        .with_writer(console)
        .with_filter(LevelFilter::from_level(config.console_level));

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(RecordFormat::file(config.logger_name.as_str()))
        .with_writer(RotatingFileWriter::new(file))
        .with_filter(LevelFilter::from_level(config.file_level));

    Ok(tracing_subscriber::registry()
        .with(LevelFilter::from_level(config.level))
        .with(console_layer)
        .with(file_layer))
}

/// Build the logger from `config` and install it as the process-wide default.
///
/// Fails with `AlreadyInitialised` on every call after the first successful
/// one, so records are never duplicated by a second set of sinks.
pub fn init(config: &LoggingConfig) -> Result<Logger, LoggingError> {
    if INSTALLED.swap(true, Ordering::SeqCst) {
        return Err(LoggingError::AlreadyInitialised);
    }

    let subscriber = match build_subscriber(config, io::stderr) {
        Ok(subscriber) => subscriber,
        Err(e) => {
            // Nothing was installed; a corrected retry is allowed.
            INSTALLED.store(false, Ordering::SeqCst);
            return Err(e);
        }
    };

    // Another crate may have installed its own subscriber first.
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|_| LoggingError::AlreadyInitialised)?;

    let logger = Logger::new(config);
    tracing::debug!(
        target: constants::LOGGER_NAME,
        app = constants::APP_NAME,
        version = constants::APP_VERSION,
        log_file = %logger.log_file().display(),
        "Logging initialised"
    );
    Ok(logger)
}

/// `init` with the default configuration.
pub fn create_logger() -> Result<Logger, LoggingError> {
    init(&LoggingConfig::default())
}

/// Handle to the configured logger.
///
/// Records go through whichever subscriber is current, so the handle is
/// cheap to clone and pass to collaborators that want explicit severity
/// methods instead of the `tracing` macros.
#[derive(Debug, Clone)]
pub struct Logger {
    name: String,
    log_file: PathBuf,
}

impl Logger {
    pub fn new(config: &LoggingConfig) -> Self {
        Self {
            name: config.logger_name.clone(),
            log_file: config.log_file(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Active file written by the file sink.
    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    pub fn debug(&self, message: impl fmt::Display) {
        tracing::debug!(target: constants::LOGGER_NAME, "{message}");
    }

    pub fn info(&self, message: impl fmt::Display) {
        tracing::info!(target: constants::LOGGER_NAME, "{message}");
    }

    pub fn warning(&self, message: impl fmt::Display) {
        tracing::warn!(target: constants::LOGGER_NAME, "{message}");
    }

    pub fn error(&self, message: impl fmt::Display) {
        tracing::error!(target: constants::LOGGER_NAME, "{message}");
    }

    pub fn critical(&self, message: impl fmt::Display) {
        tracing::error!(target: constants::LOGGER_NAME, critical = true, "{message}");
    }
}
