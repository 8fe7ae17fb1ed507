use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// A single NAV observation with its drawdown from the running peak
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavPoint {
    pub date: NaiveDate,
    pub nav: Decimal,
    /// Percentage decline from the highest NAV seen so far, always <= 0
    pub drawdown: Decimal,
}

/// An ordered NAV series, strictly ascending and unique by date.
///
/// Built once per ingestion or range-filter cycle and never mutated;
/// narrowing the date range re-derives a fresh series through the
/// annotation pass instead of editing this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NavSeries {
    pub points: Vec<NavPoint>,
    /// Drawdown at the latest observation
    pub current_drawdown: Decimal,
    /// Most negative drawdown across the series
    pub max_drawdown: Decimal,
}

impl NavSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Trailing performance metrics anchored at the latest observation.
///
/// All values are percentages rounded to two decimal places. The field
/// renames produce the exact external names consumers key on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ReturnsSnapshot {
    #[serde(rename = "YTD")]
    pub ytd: Decimal,
    #[serde(rename = "1D")]
    pub one_day: Decimal,
    #[serde(rename = "1W")]
    pub one_week: Decimal,
    #[serde(rename = "1M")]
    pub one_month: Decimal,
    #[serde(rename = "3M")]
    pub three_months: Decimal,
    #[serde(rename = "6M")]
    pub six_months: Decimal,
    #[serde(rename = "1Y")]
    pub one_year: Decimal,
    #[serde(rename = "3Y")]
    pub three_years: Decimal,
    #[serde(rename = "SI")]
    pub since_inception: Decimal,
    #[serde(rename = "DD")]
    pub current_drawdown: Decimal,
    #[serde(rename = "MAXDD")]
    pub max_drawdown: Decimal,
}

/// One point of the comparison series, date-aligned with the NAV series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkPoint {
    pub date: NaiveDate,
    pub value: Decimal,
}

/// Tunables for the synthetic benchmark transform
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkConfig {
    pub base: Decimal,
    pub sensitivity: Decimal,
    /// Synthesized values never fall below this
    pub floor: Decimal,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            base: dec!(100),
            sensitivity: dec!(0.4),
            floor: dec!(50),
        }
    }
}

/// Fund and benchmark snapshots computed from the same NAV series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnsComparison {
    pub fund: ReturnsSnapshot,
    pub benchmark: ReturnsSnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_serializes_with_the_exact_contract_names() {
        let value = serde_json::to_value(ReturnsSnapshot::default()).unwrap();
        let object = value.as_object().unwrap();
        let mut expected = vec![
            "YTD", "1D", "1W", "1M", "3M", "6M", "1Y", "3Y", "SI", "DD", "MAXDD",
        ];
        expected.sort_unstable();
        let mut names: Vec<&str> = object.keys().map(String::as_str).collect();
        names.sort_unstable();
        assert_eq!(names, expected);
    }

    #[test]
    fn nav_point_dates_serialize_as_iso() {
        let point = NavPoint {
            date: NaiveDate::from_ymd_opt(2020, 1, 5).unwrap(),
            nav: dec!(100),
            drawdown: dec!(0),
        };
        let value = serde_json::to_value(&point).unwrap();
        assert_eq!(value["date"], "2020-01-05");
    }
}
