// SEA tools - app/resolve.rs
//
// Batch sample-ID resolution behind the command line: argument expansion,
// per-path normalisation, the strict-mode outcome, and CLI overrides of the
// logger settings.

use std::path::{Path, PathBuf};

use tracing::Level;

use crate::core::sample_id::{self, SampleId};
use crate::util::constants;
use crate::util::logging::LoggingConfig;

/// Exit status when strict mode is on and any path had an unexpected suffix.
pub const EXIT_UNEXPECTED_SUFFIX: u8 = 2;

/// Command-line adjustments layered over the loaded config.
#[derive(Debug, Clone, Default)]
pub struct LoggingOverrides {
    /// Replaces the base directory for `logs/`.
    pub log_dir: Option<PathBuf>,
    /// Raises the console threshold to ERROR.
    pub quiet: bool,
}

impl LoggingOverrides {
    pub fn apply(&self, config: &mut LoggingConfig) {
        if let Some(ref dir) = self.log_dir {
            config.base_dir = dir.clone();
        }
        if self.quiet {
            config.console_level = Level::ERROR;
        }
    }
}

/// Sample IDs for one invocation, in output order.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    pub entries: Vec<(PathBuf, SampleId)>,
}

impl Resolution {
    /// Paths whose suffix was not `.tsv`.
    pub fn unexpected(&self) -> usize {
        self.entries.iter().filter(|(_, id)| !id.is_report()).count()
    }

    /// `None` on success, or the exit status strict mode demands.
    pub fn strict_failure(&self, strict: bool) -> Option<u8> {
        (strict && self.unexpected() > 0).then_some(EXIT_UNEXPECTED_SUFFIX)
    }
}

/// Expand `paths` and resolve each one, logging every outcome once.
pub fn resolve_paths(paths: &[PathBuf], max_depth: usize) -> Resolution {
    let entries = expand_paths(paths, max_depth)
        .into_iter()
        .map(|path| {
            let id = sample_id::normalize(&path);
            (path, id)
        })
        .collect();
    Resolution { entries }
}

/// Replace each directory argument with the files beneath it, sorted by
/// name. Anything that is not a directory is passed through untouched.
pub fn expand_paths(paths: &[PathBuf], max_depth: usize) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for path in paths {
        if path.is_dir() {
            out.extend(files_under(path, max_depth));
        } else {
            out.push(path.clone());
        }
    }
    out
}

fn files_under(root: &Path, max_depth: usize) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let walker = walkdir::WalkDir::new(root)
        .max_depth(max_depth)
        .follow_links(false)
        .sort_by_file_name();

    for entry_result in walker {
        match entry_result {
            Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
            Ok(_) => {}
            Err(e) => {
                // Inaccessible entry: non-fatal.
                tracing::warn!(
                    target: constants::LOGGER_NAME,
                    root = %root.display(),
                    error = %e,
                    "Skipping unreadable entry"
                );
            }
        }
    }
    files
}
