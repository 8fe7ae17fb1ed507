use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MIN_YEAR;

/// A single spreadsheet cell after decoding.
///
/// Workbook cells are loosely typed (string, number, native date, empty);
/// collapsing them into an explicit variant lets the ingestion pass apply
/// deterministic coercion rules instead of duck-typing raw values.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Date(NaiveDate),
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    /// Text content used by the header classifiers. Non-text cells never
    /// match a header pattern.
    pub fn text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Coerces the cell to a finite number: numeric cells directly, text
    /// cells via a trimmed parse. Anything else is `None`.
    pub fn as_finite_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) if n.is_finite() => Some(*n),
            Cell::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }
}

/// Raw 2-D grid of cells decoded from the first sheet of a workbook
pub type CellGrid = Vec<Vec<Cell>>;

/// Tunables for the ingestion pass
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestOptions {
    /// Rows dated before this calendar year are discarded
    pub min_year: i32,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            min_year: DEFAULT_MIN_YEAR,
        }
    }
}
