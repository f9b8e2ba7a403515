//! Entry points for records that arrive as untyped JSON.
//!
//! A JSON object always has string keys, so the only input the rename cannot handle
//! is a value that is not an object at all. Those are rejected rather than passed
//! through, since a scalar or an array can never be stored as a row.

use serde_json::Value;

use crate::errors::SanitizeError;
use crate::record::fix_reserved_columns_with_count;

/// Name of the JSON type of `value`, as used in error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Renames the reserved columns of a single JSON record.
pub fn fix_reserved_columns_in_value(value: Value) -> Result<Value, SanitizeError> {
    fix_reserved_columns_in_value_with_count(value).map(|(fixed, _)| fixed)
}

/// Same as [`fix_reserved_columns_in_value`], also returning how many keys were renamed.
pub fn fix_reserved_columns_in_value_with_count(
    value: Value,
) -> Result<(Value, usize), SanitizeError> {
    match value {
        Value::Object(map) => {
            let (fixed, renamed) = fix_reserved_columns_with_count(map);
            Ok((Value::Object(fixed), renamed))
        }
        other => Err(SanitizeError::NotARecord {
            found: json_type_name(&other),
        }),
    }
}

/// Renames the reserved columns of every row, failing on the first row that is not
/// a JSON object.
pub fn fix_reserved_columns_in_rows(rows: Vec<Value>) -> Result<Vec<Value>, SanitizeError> {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| {
            fix_reserved_columns_in_value(row).map_err(|error| SanitizeError::Row {
                index,
                source: Box::new(error),
            })
        })
        .collect()
}
