use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use super::ingest_model::Cell;

lazy_static! {
    static ref ISO_DATE_RE: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
    static ref DMY_DATE_RE: Regex = Regex::new(r"^\d{2}-\d{2}-\d{4}$").unwrap();
}

/// Formats tried for free-form date text after the two fast paths
const FALLBACK_FORMATS: &[&str] = &["%d/%m/%Y", "%Y/%m/%d", "%d %b %Y", "%b %d, %Y", "%d-%b-%Y"];

/// Converts a heterogeneous date cell into a canonical calendar date.
///
/// Native date cells are taken at face value: their calendar fields were
/// read as-is by the decode layer, so no timezone reinterpretation (and no
/// off-by-one-day drift) can happen here. Text cells are matched against
/// ISO `yyyy-mm-dd`, then `dd-mm-yyyy`, then a fixed list of common
/// formats. Returns `None` when no interpretation succeeds.
pub fn normalize_date(cell: &Cell) -> Option<NaiveDate> {
    match cell {
        Cell::Date(date) => Some(*date),
        Cell::Text(text) => normalize_date_text(text),
        Cell::Number(_) | Cell::Empty => None,
    }
}

fn normalize_date_text(raw: &str) -> Option<NaiveDate> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    if ISO_DATE_RE.is_match(text) {
        return NaiveDate::parse_from_str(text, "%Y-%m-%d").ok();
    }
    if DMY_DATE_RE.is_match(text) {
        return NaiveDate::parse_from_str(text, "%d-%m-%Y").ok();
    }
    FALLBACK_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}
