pub mod analytics;
pub mod constants;
pub mod errors;
pub mod ingest;
pub mod source;

pub use errors::{Error, Result};

pub use analytics::*;
pub use ingest::*;
pub use source::*;
