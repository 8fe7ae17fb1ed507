pub(crate) mod source_errors;
pub(crate) mod source_service;
pub(crate) mod source_traits;

pub use source_errors::SourceError;
pub use source_service::{decode_first_sheet, HttpWorkbookSource, NavDataLoader};
pub use source_traits::WorkbookSource;
