pub(crate) mod date_normalizer;
pub(crate) mod ingest_errors;
pub(crate) mod ingest_model;
pub(crate) mod ingest_service;

pub use date_normalizer::normalize_date;
pub use ingest_errors::IngestError;
pub use ingest_model::{Cell, CellGrid, IngestOptions};
pub use ingest_service::{extract_series, find_header_row, map_columns};
