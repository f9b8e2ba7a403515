use std::path::PathBuf;

use reserved_columns::fix_reserved_columns_in_value_with_count;
use serde_json::Value;
use tracing::{debug, info};

use super::input::{
    parse_document, read_input, render_document, write_output, Document, InputError, Position,
};
use super::{RoutineFailure, RoutineSuccess};
use crate::cli::commands::InputArgs;
use crate::cli::display::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixSummary {
    pub records: usize,
    pub rewritten: usize,
}

impl FixSummary {
    fn fix_record(&mut self, position: Position, record: Value) -> Result<Value, InputError> {
        let (fixed, renamed) = fix_reserved_columns_in_value_with_count(record)
            .map_err(|error| InputError::Record { position, error })?;
        self.records += 1;
        if renamed > 0 {
            self.rewritten += 1;
        }
        Ok(fixed)
    }
}

/// Renames reserved columns in every record of `document`, keeping its shape.
pub fn fix_document(document: Document) -> Result<(Document, FixSummary), InputError> {
    let mut summary = FixSummary::default();

    let fixed = match document {
        Document::Object(value) => {
            Document::Object(summary.fix_record(Position::Document, value)?)
        }
        Document::Array(rows) => Document::Array(
            rows.into_iter()
                .enumerate()
                .map(|(index, row)| summary.fix_record(Position::Index(index), row))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Document::Lines(lines) => Document::Lines(
            lines
                .into_iter()
                .map(|(line, value)| {
                    summary
                        .fix_record(Position::Line(line), value)
                        .map(|fixed| (line, fixed))
                })
                .collect::<Result<Vec<_>, _>>()?,
        ),
    };

    Ok((fixed, summary))
}

pub fn fix_columns(
    input: &InputArgs,
    output: Option<&PathBuf>,
    pretty: bool,
) -> Result<RoutineSuccess, RoutineFailure> {
    let failure = |error: InputError| {
        RoutineFailure::new(Message::new("Fix", "failed to rename reserved columns"), error)
    };

    let raw = read_input(input.input.as_deref()).map_err(failure)?;
    let document = parse_document(&raw, input.format).map_err(failure)?;
    if document.is_empty() {
        debug!("No records in input");
    }

    let (fixed, summary) = fix_document(document).map_err(failure)?;
    let rendered = render_document(&fixed, pretty).map_err(failure)?;
    write_output(output, &rendered).map_err(failure)?;

    info!(
        records = summary.records,
        rewritten = summary.rewritten,
        "Fixed reserved columns"
    );

    Ok(RoutineSuccess::success(Message::new(
        "Fix",
        format!(
            "{} of {} records had reserved columns renamed",
            summary.rewritten, summary.records
        ),
    )))
}
