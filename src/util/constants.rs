// SEA tools - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.
// Log names and formats are read by downstream tooling; keep them stable.

use tracing::Level;

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "SEA tools";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "SEA";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Config file name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Logger
// =============================================================================

/// Name rendered in file-sink records. Also used as the event target.
pub const LOGGER_NAME: &str = "SEA_logger";

/// Directory (relative to the base directory) holding the log files.
pub const LOG_DIR_NAME: &str = "logs";

/// Active log file name inside [`LOG_DIR_NAME`].
pub const LOG_FILE_NAME: &str = "SEA.log";

/// `strftime` pattern shared by both sinks: day-month-year hour:minute:second.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Minimum level accepted by the logger before any sink sees a record.
pub const DEFAULT_LOGGER_LEVEL: Level = Level::DEBUG;

/// Default console threshold: every record at DEBUG or above.
pub const DEFAULT_CONSOLE_LEVEL: Level = Level::DEBUG;

/// Default file threshold: only records that break functionality.
pub const DEFAULT_FILE_LEVEL: Level = Level::ERROR;

/// Levels accepted in config and on the command line.
pub const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

// =============================================================================
// Rotation limits
// =============================================================================

/// Size in bytes at which the active log file is rotated.
pub const DEFAULT_MAX_LOG_BYTES: u64 = 500_000; // 500 KB

/// Number of rotated backups retained next to the active file.
pub const DEFAULT_LOG_BACKUP_COUNT: usize = 5;

/// Smallest configurable rotation size. Anything below this rotates on
/// nearly every record.
pub const MIN_MAX_LOG_BYTES: u64 = 1_024;

/// Hard upper bound on the rotation size (prevents configuration mistakes).
pub const ABSOLUTE_MAX_LOG_BYTES: u64 = 1024 * 1024 * 1024; // 1 GB

/// Hard upper bound on retained backups.
pub const ABSOLUTE_MAX_LOG_BACKUPS: usize = 100;

// =============================================================================
// Sample IDs
// =============================================================================

/// Suffix of the QC summary tables whose names carry two extensions
/// (`<sample>.<report-kind>.tsv`).
pub const REPORT_SUFFIX: &str = ".tsv";

/// Maximum recursion depth when a directory is passed on the command line.
pub const DEFAULT_MAX_DEPTH: usize = 4;
