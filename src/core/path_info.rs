// SEA tools - core/path_info.rs
//
// Splits a file path into directory, base name and ending.
// Pure string work: nothing here touches the filesystem.

use std::path::{Component, Path, PathBuf};

/// The parts of a file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathInfo {
    /// Parent directory, if the path has one.
    pub directory: Option<PathBuf>,
    /// Final component with its outermost suffix removed.
    pub stem: String,
    /// Outermost suffix including its leading dot (`.tsv`), if any.
    pub suffix: Option<String>,
}

/// Break `path` into directory, stem and suffix.
///
/// A trailing `..` is kept as the name, as in `runs/..` -> `..`. A path
/// with no named final component (`/`, `.`, empty) yields an empty stem.
pub fn path_info(path: &Path) -> PathInfo {
    let name = match path.components().next_back() {
        Some(Component::Normal(name)) => name.to_string_lossy().into_owned(),
        Some(Component::ParentDir) => "..".to_string(),
        _ => String::new(),
    };
    let (stem, suffix) = split_suffix(&name);

    PathInfo {
        directory: path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf),
        stem: stem.to_string(),
        suffix: suffix.map(str::to_string),
    }
}

/// Split a single file name at its last dot.
///
/// The dot must be neither the first nor the last character: `.bashrc` and
/// `name.` have no suffix.
pub fn split_suffix(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < name.len() => (&name[..idx], Some(&name[idx..])),
        _ => (name, None),
    }
}
