use thiserror::Error;

use crate::ingest::IngestError;
use crate::source::SourceError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the NAV analytics engine
#[derive(Error, Debug)]
pub enum Error {
    #[error("Workbook source operation failed: {0}")]
    Source(#[from] SourceError),

    #[error("Ingestion failed: {0}")]
    Ingest(#[from] IngestError),
}

impl From<Error> for String {
    fn from(error: Error) -> Self {
        error.to_string()
    }
}
