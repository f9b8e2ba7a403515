//! Reading records in and writing them back out.
//!
//! Three shapes are understood: a single JSON object, a JSON array of objects, and
//! newline-delimited JSON (one object per line, blank lines ignored). Output keeps the
//! shape of the input.

use std::fmt;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use reserved_columns::SanitizeError;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// JSON when the whole input is one JSON document, NDJSON otherwise
    Auto,
    /// A single object or an array of objects
    Json,
    /// One object per line
    Ndjson,
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum InputError {
    #[error("Failed to read {source_name}: {error}")]
    Read {
        source_name: String,
        #[source]
        error: io::Error,
    },
    #[error("Failed to write {target_name}: {error}")]
    Write {
        target_name: String,
        #[source]
        error: io::Error,
    },
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid JSON on line {line}: {error}")]
    JsonLine {
        line: usize,
        #[source]
        error: serde_json::Error,
    },
    #[error("{position}: {error}")]
    Record {
        position: Position,
        #[source]
        error: SanitizeError,
    },
}

/// Where a record sits in the input, for messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Document,
    Index(usize),
    Line(usize),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Document => write!(f, "document"),
            Position::Index(index) => write!(f, "record {index}"),
            Position::Line(line) => write!(f, "line {line}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Object(Value),
    Array(Vec<Value>),
    /// Records with their 1-based line numbers
    Lines(Vec<(usize, Value)>),
}

impl Document {
    pub fn len(&self) -> usize {
        match self {
            Document::Object(_) => 1,
            Document::Array(rows) => rows.len(),
            Document::Lines(lines) => lines.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn records(&self) -> Box<dyn Iterator<Item = (Position, &Value)> + '_> {
        match self {
            Document::Object(value) => Box::new(std::iter::once((Position::Document, value))),
            Document::Array(rows) => Box::new(
                rows.iter()
                    .enumerate()
                    .map(|(index, row)| (Position::Index(index), row)),
            ),
            Document::Lines(lines) => Box::new(
                lines
                    .iter()
                    .map(|(line, value)| (Position::Line(*line), value)),
            ),
        }
    }
}

pub fn read_input(path: Option<&Path>) -> Result<String, InputError> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|error| InputError::Read {
            source_name: path.display().to_string(),
            error,
        }),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|error| InputError::Read {
                    source_name: "stdin".to_string(),
                    error,
                })?;
            Ok(buffer)
        }
    }
}

pub fn parse_document(input: &str, format: InputFormat) -> Result<Document, InputError> {
    if input.trim().is_empty() {
        return Ok(Document::Lines(Vec::new()));
    }

    match format {
        InputFormat::Json => Ok(json_document(serde_json::from_str(input)?)),
        InputFormat::Ndjson => parse_lines(input),
        InputFormat::Auto => match serde_json::from_str::<Value>(input) {
            Ok(value) => Ok(json_document(value)),
            // A first line that is not JSON on its own means the input was never NDJSON,
            // so the whole-document error is the one pointing at the real problem.
            Err(document_error) => match parse_lines(input) {
                Err(InputError::JsonLine { line: 1, .. }) => Err(document_error.into()),
                lines => lines,
            },
        },
    }
}

fn json_document(value: Value) -> Document {
    match value {
        Value::Array(rows) => Document::Array(rows),
        other => Document::Object(other),
    }
}

fn parse_lines(input: &str) -> Result<Document, InputError> {
    let mut records = Vec::new();
    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_number = index + 1;
        let value = serde_json::from_str(line).map_err(|error| InputError::JsonLine {
            line: line_number,
            error,
        })?;
        records.push((line_number, value));
    }
    Ok(Document::Lines(records))
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

pub fn render_document(document: &Document, pretty: bool) -> Result<String, InputError> {
    let mut rendered = match document {
        Document::Object(value) => to_json(value, pretty)?,
        Document::Array(rows) => to_json(rows, pretty)?,
        Document::Lines(lines) => {
            // NDJSON is one record per line whatever the pretty setting says
            let mut rendered = String::new();
            for (_, value) in lines {
                rendered.push_str(&serde_json::to_string(value)?);
                rendered.push('\n');
            }
            return Ok(rendered);
        }
    };
    rendered.push('\n');
    Ok(rendered)
}

pub fn write_output(path: Option<&PathBuf>, rendered: &str) -> Result<(), InputError> {
    match path {
        Some(path) => std::fs::write(path, rendered).map_err(|error| InputError::Write {
            target_name: path.display().to_string(),
            error,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|error| InputError::Write {
                    target_name: "stdout".to_string(),
                    error,
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_auto_detects_single_object() {
        let document = parse_document(r#"{"_id": 1}"#, InputFormat::Auto).unwrap();
        assert_eq!(document, Document::Object(json!({"_id": 1})));
    }

    #[test]
    fn test_auto_detects_array() {
        let document = parse_document(r#"[{"a": 1}, {"b": 2}]"#, InputFormat::Auto).unwrap();
        assert_eq!(
            document,
            Document::Array(vec![json!({"a": 1}), json!({"b": 2})])
        );
    }

    #[test]
    fn test_auto_falls_back_to_lines() {
        let input = "{\"a\": 1}\n\n{\"_id\": 2}\n";
        let document = parse_document(input, InputFormat::Auto).unwrap();
        assert_eq!(
            document,
            Document::Lines(vec![(1, json!({"a": 1})), (3, json!({"_id": 2}))])
        );
    }

    #[test]
    fn test_empty_input() {
        for format in [InputFormat::Auto, InputFormat::Json, InputFormat::Ndjson] {
            let document = parse_document("  \n", format).unwrap();
            assert_eq!(document, Document::Lines(Vec::new()));
            assert_eq!(render_document(&document, false).unwrap(), "");
        }
    }

    #[test]
    fn test_forced_json_rejects_lines() {
        let err = parse_document("{\"a\": 1}\n{\"b\": 2}\n", InputFormat::Json).unwrap_err();
        assert!(matches!(err, InputError::Json(_)));
    }

    #[test]
    fn test_bad_line_reports_line_number() {
        let err = parse_document("{\"a\": 1}\n{oops\n", InputFormat::Ndjson).unwrap_err();
        assert!(matches!(err, InputError::JsonLine { line: 2, .. }));
    }

    #[test]
    fn test_auto_reports_document_error_for_broken_multiline_json() {
        let input = "{\n  \"a\": 1,\n  oops\n}\n";

        let err = parse_document(input, InputFormat::Auto).unwrap_err();

        match err {
            InputError::Json(error) => assert_eq!(error.line(), 3),
            other => panic!("Expected a whole-document JSON error, got {other:?}"),
        }
    }

    #[test]
    fn test_auto_keeps_line_error_past_the_first_line() {
        let err = parse_document("{\"a\": 1}\n{oops\n", InputFormat::Auto).unwrap_err();
        assert!(matches!(err, InputError::JsonLine { line: 2, .. }));
    }

    #[test]
    fn test_forced_ndjson_on_single_object() {
        let document = parse_document(r#"{"rowid": 1}"#, InputFormat::Ndjson).unwrap();
        assert_eq!(document, Document::Lines(vec![(1, json!({"rowid": 1}))]));
    }

    #[test]
    fn test_records_positions() {
        let document = Document::Lines(vec![(2, json!({})), (5, json!({}))]);
        let positions: Vec<Position> = document.records().map(|(position, _)| position).collect();
        assert_eq!(positions, vec![Position::Line(2), Position::Line(5)]);
        assert_eq!(document.len(), 2);
    }

    #[test]
    fn test_render_keeps_shape() {
        let object = Document::Object(json!({"_id_": 1}));
        assert_eq!(render_document(&object, false).unwrap(), "{\"_id_\":1}\n");

        let array = Document::Array(vec![json!({"a": 1}), json!({"b": 2})]);
        assert_eq!(
            render_document(&array, false).unwrap(),
            "[{\"a\":1},{\"b\":2}]\n"
        );

        let lines = Document::Lines(vec![(1, json!({"a": 1})), (2, json!({"b": 2}))]);
        assert_eq!(
            render_document(&lines, true).unwrap(),
            "{\"a\":1}\n{\"b\":2}\n"
        );
    }

    #[test]
    fn test_render_pretty_object() {
        let object = Document::Object(json!({"a": 1}));
        assert_eq!(render_document(&object, true).unwrap(), "{\n  \"a\": 1\n}\n");
    }
}
