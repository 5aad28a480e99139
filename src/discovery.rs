//! Input file discovery.
//!
//! Patterns are glob patterns relative to a root directory (`**` descends recursively). Hidden
//! entries are only matched when the pattern names the leading dot explicitly.

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};

use crate::error::ToolResult;

/// Glob patterns for the rental-contract exports the column stripper consumes.
pub const CONTRACT_EXPORT_PATTERNS: [&str; 2] = [
    "**/Contratos de Locação - CC - *.csv",
    "**/Contratos de Locação - CI - *.csv",
];

/// Glob pattern for the derived files the identifier injector consumes.
pub const NO_BALANCE_PATTERN: &str = "**/*_no_balance.csv";

/// Find regular files under `root` matching any of `patterns`.
///
/// Results are returned pattern by pattern, in the order the filesystem walk yields them. A path
/// matched by more than one pattern is listed once. Entries that cannot be read while walking are
/// skipped.
pub fn find_files<S: AsRef<str>>(root: impl AsRef<Path>, patterns: &[S]) -> ToolResult<Vec<PathBuf>> {
    let root = root.as_ref();
    let opts = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let mut found: Vec<PathBuf> = Vec::new();
    for pattern in patterns {
        let full = rooted_pattern(root, pattern.as_ref());
        for path in glob::glob_with(&full, opts)?.filter_map(Result::ok) {
            if path.is_file() && !found.contains(&path) {
                found.push(path);
            }
        }
    }
    Ok(found)
}

fn rooted_pattern(root: &Path, pattern: &str) -> String {
    if root.as_os_str().is_empty() || root == Path::new(".") {
        return pattern.to_owned();
    }
    let escaped = Pattern::escape(&root.to_string_lossy());
    format!("{}/{}", escaped.trim_end_matches('/'), pattern)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{find_files, rooted_pattern, CONTRACT_EXPORT_PATTERNS, NO_BALANCE_PATTERN};
    use std::path::Path;

    #[test]
    fn rooted_pattern_leaves_cwd_patterns_alone() {
        assert_eq!(rooted_pattern(Path::new("."), "**/*.csv"), "**/*.csv");
        assert_eq!(rooted_pattern(Path::new(""), "**/*.csv"), "**/*.csv");
    }

    #[test]
    fn rooted_pattern_escapes_glob_metacharacters_in_root() {
        assert_eq!(rooted_pattern(Path::new("/data/[2024]"), "*.csv"), "/data/[[]2024[]]/*.csv");
    }

    #[test]
    fn finds_contract_exports_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("2024").join("junho");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("Contratos de Locação - CC - Jan.csv"), "a\n").unwrap();
        fs::write(nested.join("Contratos de Locação - CI - Jun.csv"), "a\n").unwrap();
        fs::write(nested.join("Contratos de Locação - XX - Jun.csv"), "a\n").unwrap();
        fs::write(nested.join("notes.csv"), "a\n").unwrap();

        let found = find_files(dir.path(), &CONTRACT_EXPORT_PATTERNS).unwrap();
        let mut names: Vec<String> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "Contratos de Locação - CC - Jan.csv".to_string(),
                "Contratos de Locação - CI - Jun.csv".to_string(),
            ]
        );
    }

    #[test]
    fn directories_and_hidden_entries_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("fake_no_balance.csv")).unwrap();
        fs::create_dir_all(dir.path().join(".cache")).unwrap();
        fs::write(dir.path().join(".cache").join("x_no_balance.csv"), "a\n").unwrap();
        fs::write(dir.path().join("real_no_balance.csv"), "a\n").unwrap();

        let found = find_files(dir.path(), &[NO_BALANCE_PATTERN]).unwrap();
        assert_eq!(found, vec![dir.path().join("real_no_balance.csv")]);
    }

    #[test]
    fn overlapping_patterns_report_each_file_once() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.csv"), "a\n").unwrap();
        let found = find_files(dir.path(), &["*.csv", "**/*.csv"]).unwrap();
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = find_files(dir.path(), &["***"]).unwrap_err();
        assert!(err.to_string().contains("invalid glob pattern"));
    }
}
