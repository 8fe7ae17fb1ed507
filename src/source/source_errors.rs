use thiserror::Error;

/// Errors raised while retrieving or decoding the source workbook
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to fetch workbook: {0}")]
    FetchFailed(String),
    #[error("Failed to decode workbook: {0}")]
    DecodeFailed(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::FetchFailed(err.to_string())
    }
}

impl From<calamine::XlsxError> for SourceError {
    fn from(err: calamine::XlsxError) -> Self {
        SourceError::DecodeFailed(err.to_string())
    }
}
