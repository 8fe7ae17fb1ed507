use thiserror::Error;

/// Errors that abort ingestion of a workbook grid.
///
/// Row-level malformation (unparseable date, non-finite NAV) is not
/// represented here; such rows are dropped silently during extraction.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("No header row with both a NAV date column and a NAV value column was found")]
    HeaderNotFound,
    #[error("Could not map the '{0}' column from the header row")]
    ColumnNotMapped(&'static str),
    #[error("No rows survived date/number validation and the year filter")]
    EmptySeries,
}

impl From<IngestError> for String {
    fn from(error: IngestError) -> Self {
        error.to_string()
    }
}
