use std::io::Cursor;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use calamine::{Data, DataType, Reader, Xlsx};
use log::{debug, warn};
use reqwest::Client;

use crate::analytics::NavSeries;
use crate::errors::Result;
use crate::ingest::{extract_series, Cell, CellGrid, IngestOptions};

use super::source_errors::SourceError;
use super::source_traits::WorkbookSource;

/// Fetches an XLSX workbook over HTTP and decodes its first sheet
pub struct HttpWorkbookSource {
    client: Client,
    url: String,
}

impl HttpWorkbookSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl WorkbookSource for HttpWorkbookSource {
    async fn fetch_grid(&self) -> Result<CellGrid> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(SourceError::from)?
            .error_for_status()
            .map_err(SourceError::from)?;
        let payload = response.bytes().await.map_err(SourceError::from)?;
        decode_first_sheet(&payload)
    }
}

/// Decodes the first sheet of an XLSX payload into an untyped cell grid
pub fn decode_first_sheet(payload: &[u8]) -> Result<CellGrid> {
    let mut workbook = Xlsx::new(Cursor::new(payload.to_vec())).map_err(SourceError::from)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SourceError::DecodeFailed("workbook has no sheets".to_string()))?
        .map_err(SourceError::from)?;
    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_from_data).collect())
        .collect())
}

/// Collapses a loosely typed workbook cell into the tagged `Cell` variant.
/// Date-typed cells keep their own calendar fields; no UTC round-trip.
fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Text(b.to_string()),
        Data::DateTime(_) | Data::DateTimeIso(_) => data
            .as_datetime()
            .map(|dt| Cell::Date(dt.date()))
            .unwrap_or(Cell::Empty),
        Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}

/// Loads NAV data through a workbook source with last-issued-wins
/// semantics.
///
/// Each `load` is stamped with a generation; if a newer load was issued
/// while one was in flight, the stale result is discarded and `Ok(None)`
/// is returned, so a late arrival is never applied over a newer snapshot.
pub struct NavDataLoader<S: WorkbookSource> {
    source: S,
    options: IngestOptions,
    generation: AtomicU64,
}

impl<S: WorkbookSource> NavDataLoader<S> {
    pub fn new(source: S, options: IngestOptions) -> Self {
        Self {
            source,
            options,
            generation: AtomicU64::new(0),
        }
    }

    pub async fn load(&self) -> Result<Option<NavSeries>> {
        let issued = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let grid = self.source.fetch_grid().await?;
        let series = extract_series(&grid, &self.options)?;
        if self.generation.load(Ordering::SeqCst) != issued {
            warn!("Discarding stale NAV load; a newer load was issued");
            return Ok(None);
        }
        debug!("Loaded NAV series with {} points", series.len());
        Ok(Some(series))
    }
}
