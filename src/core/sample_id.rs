// SEA tools - core/sample_id.rs
//
// Sample IDs from sequencing-pipeline file paths.
//
// QC summary tables are named `<sample>.<report-kind>.tsv`, so the sample ID
// is the file name with two suffixes removed. Any other ending is reported
// as unexpected; the best-effort ID then has only the outermost suffix
// removed.

use std::fmt;
use std::path::Path;

use super::path_info::path_info;
use crate::util::constants;

/// Outcome of deriving a sample ID from a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleId {
    /// A `.tsv` report: directory and two suffixes stripped.
    Report(String),
    /// Any other ending. `name` is the final component minus its outermost
    /// suffix; `suffix` is what was found instead of `.tsv`.
    UnexpectedSuffix {
        name: String,
        suffix: Option<String>,
    },
}

impl SampleId {
    pub fn name(&self) -> &str {
        match self {
            Self::Report(name) | Self::UnexpectedSuffix { name, .. } => name,
        }
    }

    pub fn into_name(self) -> String {
        match self {
            Self::Report(name) | Self::UnexpectedSuffix { name, .. } => name,
        }
    }

    pub fn is_report(&self) -> bool {
        matches!(self, Self::Report(_))
    }
}

impl fmt::Display for SampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Derive the sample ID for `path` without logging anything.
///
/// Callers decide what an unexpected suffix means for them.
pub fn resolve_sample_id(path: impl AsRef<Path>) -> SampleId {
    let info = path_info(path.as_ref());

    match info.suffix.as_deref() {
        Some(constants::REPORT_SUFFIX) => {
            // The stem is split as a path again, so a bare `.` stem is empty.
            SampleId::Report(path_info(Path::new(&info.stem)).stem)
        }
        _ => SampleId::UnexpectedSuffix {
            name: info.stem,
            suffix: info.suffix,
        },
    }
}

/// Derive the sample ID for `path` and log the outcome once: DEBUG for a
/// report, ERROR for an unexpected suffix.
pub fn normalize(path: impl AsRef<Path>) -> SampleId {
    let path = path.as_ref();
    let id = resolve_sample_id(path);

    match &id {
        SampleId::Report(name) => {
            tracing::debug!(
                target: constants::LOGGER_NAME,
                path = %path.display(),
                "Resolved sample ID {name}"
            );
        }
        SampleId::UnexpectedSuffix { name, .. } => {
            // Downstream checks match this text exactly; keep it field-free.
            tracing::error!(target: constants::LOGGER_NAME, "incorrect file type: {name}");
        }
    }

    id
}

/// Sample ID for `path` as a plain string.
///
/// Never fails: an unexpected suffix is logged at ERROR and the singly
/// stripped stem is returned. Use [`resolve_sample_id`] to tell the two
/// outcomes apart.
pub fn get_file_name(path: impl AsRef<Path>) -> String {
    normalize(path).into_name()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_strips_two_suffixes() {
        assert_eq!(
            resolve_sample_id("report.qc_summary.tsv"),
            SampleId::Report("report".to_string())
        );
        assert_eq!(
            resolve_sample_id("/runs/2602781.RMH200ST.qc_summary.tsv").name(),
            "2602781.RMH200ST"
        );
    }

    #[test]
    fn test_report_with_single_suffix_keeps_name() {
        assert_eq!(resolve_sample_id("dir/sample.tsv").name(), "sample");
    }

    #[test]
    fn test_unexpected_suffix_strips_one() {
        assert_eq!(
            resolve_sample_id("reads/sample.fq"),
            SampleId::UnexpectedSuffix {
                name: "sample".to_string(),
                suffix: Some(".fq".to_string()),
            }
        );
        assert_eq!(
            resolve_sample_id("/data/sample.fastq.gz").name(),
            "sample.fastq"
        );
    }

    #[test]
    fn test_suffix_match_is_case_sensitive() {
        let id = resolve_sample_id("report.qc_summary.TSV");
        assert!(!id.is_report());
        assert_eq!(id.name(), "report.qc_summary");
    }

    #[test]
    fn test_no_suffix_is_unexpected() {
        assert_eq!(
            resolve_sample_id("/data/sample"),
            SampleId::UnexpectedSuffix {
                name: "sample".to_string(),
                suffix: None,
            }
        );
    }

    #[test]
    fn test_whitespace_is_preserved() {
        assert_eq!(resolve_sample_id(" s1 .qc.tsv").name(), " s1 ");
    }

    #[test]
    fn test_get_file_name_matches_resolve() {
        for path in ["reads/sample.fq", "report.qc_summary.tsv", "/data/sample.fastq.gz"] {
            assert_eq!(get_file_name(path), resolve_sample_id(path).into_name());
            assert_eq!(get_file_name(path), get_file_name(path));
        }
    }

    #[test]
    fn test_dot_only_names_follow_path_rules() {
        assert_eq!(resolve_sample_id("..").name(), "..");
        assert_eq!(resolve_sample_id("runs/..").name(), "..");
        assert_eq!(resolve_sample_id("..tsv"), SampleId::Report(String::new()));
    }

    #[test]
    fn test_display_is_name() {
        assert_eq!(resolve_sample_id("a.b.tsv").to_string(), "a");
    }
}
