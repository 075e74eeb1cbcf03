use crate::error::EtlError;
use crate::results::ArticleRecord;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::Path;

/// Writes `records` as a 4-space indented UTF-8 JSON array, replacing any
/// existing file. Missing parent directories are created.
pub fn save_records<P: AsRef<Path>>(path: P, records: &[ArticleRecord]) -> Result<usize, EtlError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, to_json(records)?)?;
    ::log::debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(records.len())
}

/// Serializes with four-space indentation; non-ASCII text is written as is
pub fn to_json(records: &[ArticleRecord]) -> Result<Vec<u8>, EtlError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(url: &str, title: &str) -> ArticleRecord {
        ArticleRecord::new(
            url.to_string(),
            title.to_string(),
            "line one\nline two".to_string(),
            "2024-03-07 09:05:01".to_string(),
        )
    }

    #[test]
    fn test_layout_and_field_order() {
        let json = String::from_utf8(to_json(&[record("https://x/faq/1", "One")]).unwrap()).unwrap();
        let expected = r#"[
    {
        "url": "https://x/faq/1",
        "title": "One",
        "content": "line one\nline two",
        "timestamp": "2024-03-07 09:05:01"
    }
]"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_empty_batch_is_empty_array() {
        assert_eq!(to_json(&[]).unwrap(), b"[]");
    }

    #[test]
    fn test_non_ascii_is_not_escaped() {
        let json = String::from_utf8(to_json(&[record("https://x/faq/1", "币安 résumé")]).unwrap())
            .unwrap();
        assert!(json.contains("币安 résumé"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("json").join("faq.json");

        let written = save_records(&path, &[record("https://x/faq/1", "One")]).unwrap();

        assert_eq!(written, 1);
        let saved: Vec<ArticleRecord> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved, vec![record("https://x/faq/1", "One")]);
    }

    #[test]
    fn test_existing_directory_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("json")).unwrap();
        let path = dir.path().join("json").join("faq.json");

        assert!(save_records(&path, &[]).is_ok());
    }

    #[test]
    fn test_second_run_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faq.json");

        let first: Vec<ArticleRecord> = (1..=3)
            .map(|i| record(&format!("https://x/faq/{}", i), "First run"))
            .collect();
        save_records(&path, &first).unwrap();

        let second = vec![record("https://x/faq/9", "Second run")];
        save_records(&path, &second).unwrap();

        let saved: Vec<ArticleRecord> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved, second);
    }

    #[test]
    fn test_write_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "file").unwrap();

        let result = save_records(blocker.join("faq.json"), &[]);
        assert!(matches!(result, Err(EtlError::Io(_))));
    }
}
