// SEA tools - platform/config.rs
//
// Platform directory resolution and config.toml loading with startup
// validation. Uses the `directories` crate for XDG (Linux), AppData
// (Windows), Library (macOS) compliance.
//
// Config problems never stop the tool: each bad value becomes a warning and
// the default is kept.

use crate::util::constants;
use crate::util::logging::LoggingConfig;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::Level;

/// Resolved platform paths for SEA configuration and data.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/sea/ or %APPDATA%\SEA\config\)
    pub config_dir: PathBuf,

    /// Data directory; `logs/` is created beneath it.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            Self {
                config_dir: proj_dirs.config_dir().to_path_buf(),
                data_dir: proj_dirs.data_dir().to_path_buf(),
            }
        } else {
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Base directory for `logs/` (empty = platform data directory).
    pub directory: Option<String>,
    /// Console threshold.
    pub console_level: Option<String>,
    /// File threshold.
    pub file_level: Option<String>,
    /// Rotation size in bytes.
    pub max_file_bytes: Option<u64>,
    /// Rotated files to keep.
    pub backup_count: Option<usize>,
}

/// Validated configuration derived from `config.toml`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base directory override for `logs/`.
    pub log_directory: Option<PathBuf>,
    pub console_level: Level,
    pub file_level: Level,
    pub max_log_bytes: u64,
    pub log_backup_count: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_directory: None,
            console_level: constants::DEFAULT_CONSOLE_LEVEL,
            file_level: constants::DEFAULT_FILE_LEVEL,
            max_log_bytes: constants::DEFAULT_MAX_LOG_BYTES,
            log_backup_count: constants::DEFAULT_LOG_BACKUP_COUNT,
        }
    }
}

impl AppConfig {
    /// Logger settings, with `log_directory` taking precedence over
    /// `default_base`.
    pub fn logging_config(&self, default_base: &Path) -> LoggingConfig {
        LoggingConfig {
            base_dir: self
                .log_directory
                .clone()
                .unwrap_or_else(|| default_base.to_path_buf()),
            console_level: self.console_level,
            file_level: self.file_level,
            max_bytes: self.max_log_bytes,
            backup_count: self.log_backup_count,
            ..LoggingConfig::default()
        }
    }
}

/// Parse a level name from config; `warning` is accepted for `warn`.
pub fn parse_level(name: &str) -> Option<Level> {
    match name.to_lowercase().as_str() {
        "warning" => Some(Level::WARN),
        other if constants::VALID_LOG_LEVELS.contains(&other) => other.parse().ok(),
        _ => None,
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns the validated config and a list of non-fatal warnings. A missing
/// file yields defaults with no warnings. This runs before the logger
/// exists, so warnings are returned rather than logged.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            warnings.push(format!(
                "Could not read config file '{}': {e}. Using defaults.",
                config_path.display()
            ));
            return (AppConfig::default(), warnings);
        }
    };

    match toml::from_str::<RawConfig>(&content) {
        Ok(raw) => {
            let config = validate(raw, &mut warnings);
            (config, warnings)
        }
        Err(e) => {
            warnings.push(format!(
                "Failed to parse config file '{}': {e}. Using defaults.",
                config_path.display()
            ));
            (AppConfig::default(), warnings)
        }
    }
}

/// Check each raw value against the named bounds, accumulating all problems.
fn validate(raw: RawConfig, warnings: &mut Vec<String>) -> AppConfig {
    let mut config = AppConfig::default();
    let logging = raw.logging;

    // -- directory --
    if let Some(dir) = logging.directory {
        if !dir.is_empty() {
            config.log_directory = Some(PathBuf::from(dir));
        }
    }

    // -- levels --
    for (key, value, slot) in [
        ("console_level", logging.console_level, &mut config.console_level),
        ("file_level", logging.file_level, &mut config.file_level),
    ] {
        if let Some(value) = value {
            match parse_level(&value) {
                Some(level) => *slot = level,
                None => warnings.push(format!(
                    "[logging] {key} = \"{value}\" is not recognised. \
                     Valid values: error, warn, info, debug, trace. Using default.",
                )),
            }
        }
    }

    // -- max_file_bytes --
    if let Some(bytes) = logging.max_file_bytes {
        if (constants::MIN_MAX_LOG_BYTES..=constants::ABSOLUTE_MAX_LOG_BYTES).contains(&bytes) {
            config.max_log_bytes = bytes;
        } else {
            warnings.push(format!(
                "[logging] max_file_bytes = {bytes} is out of range ({}-{}). Using default ({}).",
                constants::MIN_MAX_LOG_BYTES,
                constants::ABSOLUTE_MAX_LOG_BYTES,
                constants::DEFAULT_MAX_LOG_BYTES,
            ));
        }
    }

    // -- backup_count --
    if let Some(count) = logging.backup_count {
        if count <= constants::ABSOLUTE_MAX_LOG_BACKUPS {
            config.log_backup_count = count;
        } else {
            warnings.push(format!(
                "[logging] backup_count = {count} exceeds maximum ({}). Using default ({}).",
                constants::ABSOLUTE_MAX_LOG_BACKUPS,
                constants::DEFAULT_LOG_BACKUP_COUNT,
            ));
        }
    }

    config
}
