use reserved_columns::json::json_type_name;
use reserved_columns::{is_reserved_column, SanitizeError};
use serde_json::Value;
use tracing::{info, warn};

use super::input::{parse_document, read_input, write_output, Document, InputError, Position};
use super::{RoutineFailure, RoutineSuccess};
use crate::cli::commands::InputArgs;
use crate::cli::display::Message;

/// A record holding at least one reserved column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub position: Position,
    pub columns: Vec<String>,
}

pub fn find_reserved_columns(document: &Document) -> Result<Vec<Finding>, InputError> {
    let mut findings = Vec::new();
    for (position, record) in document.records() {
        let Value::Object(map) = record else {
            return Err(InputError::Record {
                position,
                error: SanitizeError::NotARecord {
                    found: json_type_name(record),
                },
            });
        };

        let columns: Vec<String> = map
            .keys()
            .filter(|key| is_reserved_column(key))
            .cloned()
            .collect();
        if !columns.is_empty() {
            findings.push(Finding { position, columns });
        }
    }
    Ok(findings)
}

pub fn check_columns(input: &InputArgs) -> Result<RoutineSuccess, RoutineFailure> {
    let failure = |error: InputError| {
        RoutineFailure::new(Message::new("Check", "failed to read records"), error)
    };

    let raw = read_input(input.input.as_deref()).map_err(failure)?;
    let document = parse_document(&raw, input.format).map_err(failure)?;
    let findings = find_reserved_columns(&document).map_err(failure)?;

    if findings.is_empty() {
        info!(records = document.len(), "No reserved columns found");
        return Ok(RoutineSuccess::success(Message::new(
            "Check",
            format!("no reserved columns in {} records", document.len()),
        )));
    }

    let report: String = findings
        .iter()
        .map(|finding| format!("{}: {}\n", finding.position, finding.columns.join(", ")))
        .collect();
    write_output(None, &report).map_err(failure)?;

    warn!(
        records = document.len(),
        offending = findings.len(),
        "Reserved columns found"
    );

    Err(RoutineFailure::error(Message::new(
        "Check",
        format!(
            "{} of {} records contain reserved columns",
            findings.len(),
            document.len()
        ),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_finds_reserved_columns_per_record() {
        let document = Document::Lines(vec![
            (1, json!({"a": 1})),
            (2, json!({"_id": 1, "name": "x", "rowid__": 2})),
            (3, json!({"_idx": 1})),
        ]);

        let findings = find_reserved_columns(&document).unwrap();

        assert_eq!(
            findings,
            vec![Finding {
                position: Position::Line(2),
                columns: vec!["_id".to_string(), "rowid__".to_string()],
            }]
        );
    }

    #[test]
    fn test_clean_document_has_no_findings() {
        let document = Document::Array(vec![json!({"a": 1}), json!({})]);
        assert!(find_reserved_columns(&document).unwrap().is_empty());
    }

    #[test]
    fn test_non_object_is_rejected() {
        let document = Document::Array(vec![json!({"a": 1}), json!(null)]);

        let err = find_reserved_columns(&document).unwrap_err();

        assert!(matches!(
            err,
            InputError::Record {
                position: Position::Index(1),
                error: SanitizeError::NotARecord { found: "null" },
            }
        ));
    }
}
