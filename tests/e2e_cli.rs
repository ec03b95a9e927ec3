// SEA tools - tests/e2e_cli.rs
//
// End-to-end tests for batch resolution and the `sea-tools` binary.
//
// Library-level tests run against real temp directories; the binary tests
// launch the compiled executable with its own log and config directories so
// no platform state is touched.

use sea_tools::app::resolve::{
    expand_paths, resolve_paths, LoggingOverrides, EXIT_UNEXPECTED_SUFFIX,
};
use sea_tools::util::logging::LoggingConfig;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::Level;

// =============================================================================
// Helpers
// =============================================================================

/// Build a small run directory:
///
/// ```text
/// root/
///   b.qc_summary.tsv
///   a.qc_summary.tsv
///   nested/
///     c.fq
///     deeper/
///       d.qc_summary.tsv
/// ```
fn run_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("b.qc_summary.tsv"), "").unwrap();
    fs::write(root.join("a.qc_summary.tsv"), "").unwrap();
    fs::create_dir_all(root.join("nested").join("deeper")).unwrap();
    fs::write(root.join("nested").join("c.fq"), "").unwrap();
    fs::write(root.join("nested").join("deeper").join("d.qc_summary.tsv"), "").unwrap();
    dir
}

fn names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
        .collect()
}

fn sea_tools(log_base: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_sea-tools"))
        .arg("--log-dir")
        .arg(log_base)
        // An empty config dir keeps the user's config.toml out of the test.
        .arg("--config")
        .arg(log_base)
        .args(args)
        .output()
        .unwrap()
}

// =============================================================================
// Expansion and strict outcome
// =============================================================================

/// Directories expand to their files in name order; files pass through.
#[test]
fn e2e_directory_expands_sorted() {
    let dir = run_dir();
    let loose = PathBuf::from("loose/x.fq");

    let paths = expand_paths(&[dir.path().to_path_buf(), loose.clone()], 4);

    assert_eq!(
        names(&paths),
        vec!["a.qc_summary.tsv", "b.qc_summary.tsv", "c.fq", "d.qc_summary.tsv", "x.fq"]
    );
    assert_eq!(paths.last(), Some(&loose));
}

/// Files deeper than the depth bound are not visited.
#[test]
fn e2e_expansion_respects_depth_bound() {
    let dir = run_dir();

    let shallow = expand_paths(&[dir.path().to_path_buf()], 1);
    assert_eq!(names(&shallow), vec!["a.qc_summary.tsv", "b.qc_summary.tsv"]);

    let middle = expand_paths(&[dir.path().to_path_buf()], 2);
    assert_eq!(
        names(&middle),
        vec!["a.qc_summary.tsv", "b.qc_summary.tsv", "c.fq"]
    );
}

/// Strict mode fails only when an unexpected suffix was seen.
#[test]
fn e2e_strict_outcome_counts_unexpected_suffixes() {
    let dir = run_dir();

    let mixed = resolve_paths(&[dir.path().to_path_buf()], 4);
    assert_eq!(mixed.entries.len(), 4);
    assert_eq!(mixed.unexpected(), 1);
    assert_eq!(mixed.strict_failure(true), Some(EXIT_UNEXPECTED_SUFFIX));
    assert_eq!(mixed.strict_failure(false), None);

    let ids: Vec<_> = mixed.entries.iter().map(|(_, id)| id.name()).collect();
    assert_eq!(ids, vec!["a", "b", "c", "d"]);

    let clean = resolve_paths(&[PathBuf::from("report.qc_summary.tsv")], 4);
    assert_eq!(clean.strict_failure(true), None);
}

/// `--log-dir` and `--quiet` adjust the loaded logger settings.
#[test]
fn e2e_overrides_adjust_logging_config() {
    let mut config = LoggingConfig::default();
    LoggingOverrides::default().apply(&mut config);
    assert_eq!(config, LoggingConfig::default());

    LoggingOverrides {
        log_dir: Some(PathBuf::from("/srv/sea")),
        quiet: true,
    }
    .apply(&mut config);
    assert_eq!(config.base_dir, PathBuf::from("/srv/sea"));
    assert_eq!(config.console_level, Level::ERROR);
    assert_eq!(config.file_level, Level::ERROR);
}

// =============================================================================
// Binary
// =============================================================================

/// `--strict` exits 2 and still prints every sample ID.
#[test]
fn e2e_binary_strict_exit_status() {
    let logs = tempfile::tempdir().unwrap();
    let out = sea_tools(
        logs.path(),
        &["--strict", "report.qc_summary.tsv", "reads/sample.fq"],
    );

    assert_eq!(out.status.code(), Some(i32::from(EXIT_UNEXPECTED_SUFFIX)));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(
        stdout,
        "report.qc_summary.tsv\treport\nreads/sample.fq\tsample\n"
    );

    // The log directory came from --log-dir.
    let file = fs::read_to_string(logs.path().join("logs").join("SEA.log")).unwrap();
    assert!(file.contains("[ERROR]: incorrect file type: sample'"), "file: {file}");
}

/// Without `--strict` an unexpected suffix still exits 0; `--quiet` hides
/// everything below ERROR on the console.
#[test]
fn e2e_binary_quiet_non_strict() {
    let logs = tempfile::tempdir().unwrap();
    let out = sea_tools(logs.path(), &["--quiet", "report.qc_summary.tsv", "reads/sample.fq"]);

    assert_eq!(out.status.code(), Some(0));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(!stderr.contains("[DEBUG]"), "stderr: {stderr}");
    assert!(!stderr.contains("[INFO]"), "stderr: {stderr}");
    assert_eq!(
        stderr.lines().filter(|l| l.contains("[ERROR]")).count(),
        1,
        "stderr: {stderr}"
    );
}
