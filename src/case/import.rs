//! Load a casebook from disk
//!
//! Accepts `.json` (either `{"cases": [...]}` or a bare array) and `.toml`
//! (`[[cases]]` tables). Loaded cases only live for the session.

use super::InvestigationCase;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid JSON casebook: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid TOML casebook: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Unsupported casebook format '{0}' (expected .json or .toml)")]
    UnsupportedFormat(String),
    #[error("Casebook contains no cases")]
    Empty,
    #[error("Case id '{0}' appears more than once")]
    DuplicateId(String),
}

#[derive(Deserialize)]
struct CaseFile {
    cases: Vec<InvestigationCase>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCaseFile {
    Wrapped(CaseFile),
    Bare(Vec<InvestigationCase>),
}

pub fn load_cases(path: &Path) -> Result<Vec<InvestigationCase>, ImportError> {
    let content = fs::read_to_string(path).map_err(|source| ImportError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase();

    let cases = match extension.as_str() {
        "json" => parse_json(&content)?,
        "toml" => parse_toml(&content)?,
        other => return Err(ImportError::UnsupportedFormat(other.to_string())),
    };

    if cases.is_empty() {
        return Err(ImportError::Empty);
    }
    check_unique_ids(&cases)?;
    tracing::info!(count = cases.len(), path = %path.display(), "loaded casebook");
    Ok(cases)
}

pub fn parse_json(content: &str) -> Result<Vec<InvestigationCase>, ImportError> {
    Ok(match serde_json::from_str::<JsonCaseFile>(content)? {
        JsonCaseFile::Wrapped(file) => file.cases,
        JsonCaseFile::Bare(cases) => cases,
    })
}

/// Cases are addressed by id everywhere, so a casebook may not repeat one
fn check_unique_ids(cases: &[InvestigationCase]) -> Result<(), ImportError> {
    let mut seen = HashSet::new();
    for case in cases {
        if !seen.insert(case.id.as_str()) {
            return Err(ImportError::DuplicateId(case.id.clone()));
        }
    }
    Ok(())
}

pub fn parse_toml(content: &str) -> Result<Vec<InvestigationCase>, ImportError> {
    Ok(toml::from_str::<CaseFile>(content)?.cases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TOML_BOOK: &str = r#"
[[cases]]
id = "case-t1"
title = "The Orchard Poisoning"
status = "Cold"

[[cases.suspects]]
id = "s1"
name = "Edna Marsh"
role = "Cook"
"#;

    #[test]
    fn test_parse_bare_and_wrapped_json() {
        let bare = r#"[{"id": "a", "title": "A"}]"#;
        let wrapped = r#"{"cases": [{"id": "b", "title": "B"}, {"id": "c", "title": "C"}]}"#;
        assert_eq!(parse_json(bare).unwrap().len(), 1);
        assert_eq!(parse_json(wrapped).unwrap()[1].id, "c");
    }

    #[test]
    fn test_parse_toml() {
        let cases = parse_toml(TOML_BOOK).unwrap();
        assert_eq!(cases[0].title, "The Orchard Poisoning");
        assert_eq!(cases[0].suspects[0].name, "Edna Marsh");
    }

    #[test]
    fn test_load_cases_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.toml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(TOML_BOOK.as_bytes()).unwrap();

        let cases = load_cases(&path).unwrap();
        assert_eq!(cases.len(), 1);
    }

    #[test]
    fn test_load_rejects_empty_and_unknown_formats() {
        let dir = tempfile::tempdir().unwrap();

        let empty = dir.path().join("empty.json");
        fs::write(&empty, "[]").unwrap();
        assert!(matches!(load_cases(&empty), Err(ImportError::Empty)));

        let yaml = dir.path().join("book.yaml");
        fs::write(&yaml, "cases: []").unwrap();
        assert!(matches!(
            load_cases(&yaml),
            Err(ImportError::UnsupportedFormat(ext)) if ext == "yaml"
        ));

        let missing = dir.path().join("missing.json");
        assert!(matches!(load_cases(&missing), Err(ImportError::Read { .. })));
    }

    #[test]
    fn test_load_rejects_repeated_case_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        fs::write(
            &path,
            r#"[{"id": "x", "title": "First"}, {"id": "y", "title": "Other"}, {"id": "x", "title": "Second"}]"#,
        )
        .unwrap();

        let err = load_cases(&path).unwrap_err();
        assert!(matches!(err, ImportError::DuplicateId(ref id) if id == "x"));
    }
}
