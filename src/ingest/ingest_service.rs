use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use log::debug;
use num_traits::FromPrimitive;
use regex::Regex;
use rust_decimal::Decimal;

use crate::analytics::{annotate_drawdowns, NavSeries};

use super::date_normalizer::normalize_date;
use super::ingest_errors::IngestError;
use super::ingest_model::{Cell, CellGrid, IngestOptions};

lazy_static! {
    /// Matches "NAV Date", "NAV DATE", "NAVDATE", ...
    static ref NAV_DATE_RE: Regex = Regex::new(r"(?i)nav\s*date").unwrap();
    /// Matches "NAV (Rs)", "NAV Rs", "NAV (Rs.)", "NAV(Rs)", ...
    static ref NAV_VALUE_RE: Regex = Regex::new(r"(?i)nav\s*\(?rs\.?\)?").unwrap();
}

fn matches_header(cell: &Cell, pattern: &Regex) -> bool {
    cell.text().map_or(false, |text| pattern.is_match(text))
}

/// Scans rows top-to-bottom and returns the index of the first row that
/// contains both a NAV date column and a NAV value column. Stateless
/// classification pass; preamble rows above the header never match.
pub fn find_header_row(grid: &CellGrid) -> Option<usize> {
    grid.iter().position(|row| {
        row.iter().any(|cell| matches_header(cell, &NAV_DATE_RE))
            && row.iter().any(|cell| matches_header(cell, &NAV_VALUE_RE))
    })
}

/// Maps the date and NAV value column indices from a header row.
pub fn map_columns(header: &[Cell]) -> Result<(usize, usize), IngestError> {
    let date_col = header
        .iter()
        .position(|cell| matches_header(cell, &NAV_DATE_RE))
        .ok_or(IngestError::ColumnNotMapped("NAV Date"))?;
    let value_col = header
        .iter()
        .position(|cell| matches_header(cell, &NAV_VALUE_RE))
        .ok_or(IngestError::ColumnNotMapped("NAV (Rs)"))?;
    Ok((date_col, value_col))
}

/// Extracts, filters, and sorts the NAV observations of a decoded grid,
/// then runs the drawdown annotation pass over them.
///
/// Rows whose date fails to normalize or whose NAV is not a finite number
/// are dropped silently; rows dated before `options.min_year` are filtered
/// out. An empty survivor set aborts with `EmptySeries` so no partial
/// series is ever handed downstream.
pub fn extract_series(grid: &CellGrid, options: &IngestOptions) -> Result<NavSeries, IngestError> {
    let header_idx = find_header_row(grid).ok_or(IngestError::HeaderNotFound)?;
    let (date_col, value_col) = map_columns(&grid[header_idx])?;

    let mut rows: Vec<(NaiveDate, Decimal)> = Vec::new();
    for (offset, row) in grid[header_idx + 1..].iter().enumerate() {
        let date = row.get(date_col).and_then(normalize_date);
        let nav = row
            .get(value_col)
            .and_then(Cell::as_finite_number)
            .and_then(Decimal::from_f64);
        match (date, nav) {
            (Some(date), Some(nav)) => {
                if date.year() >= options.min_year {
                    rows.push((date, nav));
                }
            }
            _ => debug!("Dropping malformed row {}", header_idx + 1 + offset),
        }
    }
    if rows.is_empty() {
        return Err(IngestError::EmptySeries);
    }

    rows.sort_by_key(|(date, _)| *date);
    rows.dedup_by_key(|(date, _)| *date);
    Ok(annotate_drawdowns(rows))
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn text(value: &str) -> Cell {
        Cell::Text(value.to_string())
    }

    fn nav_grid() -> CellGrid {
        vec![
            vec![text("Focused Fund - NAV history"), Cell::Empty],
            vec![Cell::Empty, Cell::Empty],
            vec![text("NAV Date"), text("NAV (Rs)")],
            vec![text("2020-01-02"), Cell::Number(110.0)],
            vec![text("2020-01-01"), Cell::Number(100.0)],
            vec![text("03-01-2020"), text("99")],
        ]
    }

    #[test]
    fn finds_header_below_preamble_rows() {
        assert_eq!(find_header_row(&nav_grid()), Some(2));
    }

    #[test]
    fn matches_punctuated_header_variants() {
        let grid: CellGrid = vec![vec![text("NAVDATE"), text("NAV(Rs.)")]];
        assert_eq!(find_header_row(&grid), Some(0));
        let (date_col, value_col) = map_columns(&grid[0]).unwrap();
        assert_eq!((date_col, value_col), (0, 1));
    }

    #[test]
    fn missing_header_is_an_error() {
        let grid: CellGrid = vec![vec![text("Date"), text("Price")]];
        assert!(matches!(
            extract_series(&grid, &IngestOptions::default()),
            Err(IngestError::HeaderNotFound)
        ));
    }

    #[test]
    fn unmappable_column_is_an_error() {
        let header = vec![text("NAV Date"), text("Units")];
        assert!(matches!(
            map_columns(&header),
            Err(IngestError::ColumnNotMapped("NAV (Rs)"))
        ));
    }

    #[test]
    fn extracts_sorts_and_annotates() {
        let options = IngestOptions { min_year: 2019 };
        let series = extract_series(&nav_grid(), &options).unwrap();
        let dates: Vec<String> = series
            .points
            .iter()
            .map(|p| p.date.format("%Y-%m-%d").to_string())
            .collect();
        assert_eq!(dates, vec!["2020-01-01", "2020-01-02", "2020-01-03"]);
        assert_eq!(series.points[2].nav, dec!(99));
        assert_eq!(series.points[2].drawdown, dec!(-10.00));
    }

    #[test]
    fn drops_malformed_rows_silently() {
        let mut grid = nav_grid();
        grid.push(vec![text("not a date"), Cell::Number(120.0)]);
        grid.push(vec![text("2020-01-04"), text("n/a")]);
        grid.push(vec![text("2020-01-05"), Cell::Number(f64::NAN)]);
        let series = extract_series(&grid, &IngestOptions::default()).unwrap();
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn filters_rows_before_min_year() {
        let mut grid = nav_grid();
        grid.push(vec![text("2018-12-31"), Cell::Number(90.0)]);
        let series = extract_series(&grid, &IngestOptions::default()).unwrap();
        assert!(series.points.iter().all(|p| p.date.year() >= 2019));
    }

    #[test]
    fn all_rows_filtered_is_empty_series() {
        let grid: CellGrid = vec![
            vec![text("NAV Date"), text("NAV (Rs)")],
            vec![text("2018-06-01"), Cell::Number(100.0)],
        ];
        assert!(matches!(
            extract_series(&grid, &IngestOptions::default()),
            Err(IngestError::EmptySeries)
        ));
    }
}
