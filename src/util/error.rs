// SEA tools - util/error.rs
//
// Typed errors with context-preserving chains.
// No string-based error propagation; every I/O failure carries its path.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while building or installing the logger.
///
/// All variants are fatal to the caller of the factory: there is no
/// fallback sink.
#[derive(Debug)]
pub enum LoggingError {
    /// The `logs` directory could not be created.
    CreateLogDir { path: PathBuf, source: io::Error },

    /// The active log file could not be opened for appending.
    OpenLogFile { path: PathBuf, source: io::Error },

    /// A logger has already been installed in this process.
    AlreadyInitialised,
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateLogDir { path, source } => write!(
                f,
                "Failed to create log directory '{}': {source}",
                path.display()
            ),
            Self::OpenLogFile { path, source } => {
                write!(f, "Failed to open log file '{}': {source}", path.display())
            }
            Self::AlreadyInitialised => write!(
                f,
                "Logger already initialised; it must be created once per process"
            ),
        }
    }
}

impl std::error::Error for LoggingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CreateLogDir { source, .. } => Some(source),
            Self::OpenLogFile { source, .. } => Some(source),
            Self::AlreadyInitialised => None,
        }
    }
}
