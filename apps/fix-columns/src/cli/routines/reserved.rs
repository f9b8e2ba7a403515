use reserved_columns::RESERVED_COLUMNS;

use super::input::{write_output, InputError};
use super::{RoutineFailure, RoutineSuccess};
use crate::cli::display::Message;

pub fn render_reserved(json: bool) -> Result<String, InputError> {
    if json {
        let mut rendered = serde_json::to_string(&RESERVED_COLUMNS)?;
        rendered.push('\n');
        Ok(rendered)
    } else {
        Ok(RESERVED_COLUMNS
            .iter()
            .map(|name| format!("{name}\n"))
            .collect())
    }
}

/// Prints the reserved column names so other tools can validate against the same list.
pub fn list_reserved(json: bool) -> Result<RoutineSuccess, RoutineFailure> {
    render_reserved(json)
        .and_then(|rendered| write_output(None, &rendered))
        .map_err(|error| {
            RoutineFailure::new(
                Message::new("Reserved", "failed to list reserved columns"),
                error,
            )
        })?;

    Ok(RoutineSuccess::silent())
}
