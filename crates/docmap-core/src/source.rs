//! Loading document sets from exported files.
//!
//! Real deployments hand the mapper live collection handles; tooling works
//! from exports instead. A document file is a JSON array of documents, a
//! single document, or newline-delimited documents (one per line), tried in
//! that order.

use std::path::Path;

use docmap_core_common::Document;
use serde_json::Value;

use crate::error::{IoError, Result};

/// Read and parse a document file.
///
/// # Errors
///
/// Returns [`IoError::Read`] when the file cannot be read and
/// [`IoError::Parse`] when its content matches none of the accepted layouts.
pub fn load_documents(path: impl AsRef<Path>) -> Result<Vec<Document>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_documents(&bytes, path)
}

/// Parse raw bytes into a document set.
///
/// # Errors
///
/// Returns [`IoError::Parse`] when the bytes are neither a JSON document
/// set nor newline-delimited documents.
pub fn parse_documents(bytes: &[u8], path: &Path) -> Result<Vec<Document>> {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(value) => documents_from_value(value, path),
        Err(primary_err) => {
            let primary_err_message = primary_err.to_string();
            match parse_document_lines(bytes, path) {
                Ok(documents) => Ok(documents),
                Err(line_err) => Err(IoError::Parse {
                    path: path.to_path_buf(),
                    line: None,
                    message: format!(
                        "not a JSON document set ({primary_err_message}); \
                         also failed as newline-delimited documents: {line_err}"
                    ),
                }
                .into()),
            }
        },
    }
}

fn documents_from_value(value: Value, path: &Path) -> Result<Vec<Document>> {
    match value {
        Value::Object(document) => Ok(vec![document]),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(document) => Ok(document),
                other => Err(IoError::Parse {
                    path: path.to_path_buf(),
                    line: None,
                    message: format!(
                        "array members must be documents, found {}",
                        docmap_core_common::describe_value(&other)
                    ),
                }
                .into()),
            })
            .collect(),
        other => Err(IoError::Parse {
            path: path.to_path_buf(),
            line: None,
            message: format!(
                "expected a document or an array of documents, found {}",
                docmap_core_common::describe_value(&other)
            ),
        }
        .into()),
    }
}

fn parse_document_lines(bytes: &[u8], path: &Path) -> Result<Vec<Document>> {
    let mut documents = Vec::new();
    for (line_idx, raw_line) in bytes.split(|b| *b == b'\n').enumerate() {
        let line_number = line_idx + 1;
        let line = std::str::from_utf8(raw_line)
            .map_err(|err| IoError::Parse {
                path: path.to_path_buf(),
                line: Some(line_number),
                message: format!("line is not valid UTF-8: {err}"),
            })?
            .trim();

        if line.is_empty() {
            continue;
        }

        let value: Value = serde_json::from_str(line).map_err(|err| IoError::Parse {
            path: path.to_path_buf(),
            line: Some(line_number),
            message: format!("failed to parse document: {err}"),
        })?;

        match value {
            Value::Object(document) => documents.push(document),
            other => {
                return Err(IoError::Parse {
                    path: path.to_path_buf(),
                    line: Some(line_number),
                    message: format!(
                        "lines must hold documents, found {}",
                        docmap_core_common::describe_value(&other)
                    ),
                }
                .into());
            },
        }
    }

    if documents.is_empty() {
        Err(IoError::Parse {
            path: path.to_path_buf(),
            line: None,
            message: "no documents found".to_string(),
        }
        .into())
    } else {
        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocMapError;

    fn parse(bytes: &[u8]) -> Result<Vec<Document>> {
        parse_documents(bytes, Path::new("test.json"))
    }

    #[test]
    fn parse_document_array() {
        let documents = parse(br#"[{"a": 1}, {"b": 2}]"#).expect("parses");
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].get("a"), Some(&serde_json::json!(1)));
    }

    #[test]
    fn parse_single_document() {
        let documents = parse(br#"{"name": "X"}"#).expect("parses");
        assert_eq!(documents.len(), 1);
    }

    #[test]
    fn parse_newline_delimited_documents() {
        let documents = parse(b"{\"id\": 1}\n\n{\"id\": 2}\n").expect("parses");
        assert_eq!(documents.len(), 2);
    }

    #[test]
    fn parse_scalar_top_level_fails() {
        let err = parse(b"42").unwrap_err();
        assert!(err.to_string().contains("expected a document"));
    }

    #[test]
    fn parse_array_with_scalar_member_fails() {
        let err = parse(br#"[{"a": 1}, 2]"#).unwrap_err();
        assert!(err.to_string().contains("array members must be documents"));
    }

    #[test]
    fn parse_invalid_input_combines_both_errors() {
        let err = parse(b"not json at all").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("not a JSON document set"));
        assert!(message.contains("also failed as newline-delimited documents"));
    }

    #[test]
    fn parse_bad_line_reports_the_line_number() {
        let err = parse(b"{\"id\": 1}\nnot json").unwrap_err();
        match err {
            DocMapError::Io(IoError::Parse { message, .. }) => {
                assert!(message.contains("at line 2"), "{message}");
            },
            other => panic!("expected a parse error, got {other}"),
        }
    }

    #[test]
    fn load_documents_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("docs.json");
        std::fs::write(&path, br#"[{"name": "X"}]"#).unwrap();

        let documents = load_documents(&path).expect("loads");
        assert_eq!(documents.len(), 1);

        let missing = load_documents(dir.path().join("absent.json"));
        assert!(matches!(
            missing,
            Err(DocMapError::Io(IoError::Read { .. }))
        ));
    }
}
