use async_trait::async_trait;

use crate::errors::Result;
use crate::ingest::CellGrid;

/// Asynchronous source of a decoded workbook grid.
///
/// Implementations retrieve one workbook and decode its first sheet into
/// the untyped cell grid the ingestion pass consumes.
#[async_trait]
pub trait WorkbookSource: Send + Sync {
    async fn fetch_grid(&self) -> Result<CellGrid>;
}
