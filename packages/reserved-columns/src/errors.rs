#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SanitizeError {
    #[error("Expected a JSON object record, found {found}")]
    NotARecord { found: &'static str },
    #[error("Row {index} is not a record")]
    Row {
        index: usize,
        #[source]
        source: Box<SanitizeError>,
    },
}
