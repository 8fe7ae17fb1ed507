use crate::constants::METRIC_DECIMAL_PRECISION;

use super::analytics_model::{BenchmarkConfig, BenchmarkPoint, NavSeries};

/// Source of a date-aligned comparison series for a NAV series.
///
/// The synthetic transform below is the only implementation today. A real
/// market-index feed can replace it behind this trait without touching the
/// returns calculator, which only needs a date-aligned value sequence.
pub trait BenchmarkFeed: Send + Sync {
    fn benchmark_for(&self, series: &NavSeries) -> Vec<BenchmarkPoint>;
}

/// Deterministic placeholder benchmark derived arithmetically from the
/// fund's own series; explicitly not external market data.
#[derive(Debug, Clone, Default)]
pub struct SyntheticBenchmark {
    config: BenchmarkConfig,
}

impl SyntheticBenchmark {
    pub fn new(config: BenchmarkConfig) -> Self {
        Self { config }
    }
}

impl BenchmarkFeed for SyntheticBenchmark {
    fn benchmark_for(&self, series: &NavSeries) -> Vec<BenchmarkPoint> {
        synthesize_benchmark(series, &self.config)
    }
}

/// `value = max(floor, base + (nav - nav0) * sensitivity)`, rounded to two
/// decimals and aligned 1:1 with the input dates. Empty in, empty out.
pub fn synthesize_benchmark(series: &NavSeries, config: &BenchmarkConfig) -> Vec<BenchmarkPoint> {
    let Some(first) = series.points.first() else {
        return Vec::new();
    };
    let start_nav = first.nav;
    series
        .points
        .iter()
        .map(|point| {
            let value = (config.base + (point.nav - start_nav) * config.sensitivity)
                .round_dp(METRIC_DECIMAL_PRECISION);
            BenchmarkPoint {
                date: point.date,
                value: value.max(config.floor),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::super::drawdown_service::annotate_drawdowns;
    use super::*;

    fn series(values: &[(u32, &str)]) -> NavSeries {
        annotate_drawdowns(
            values
                .iter()
                .map(|&(day, nav)| {
                    (
                        NaiveDate::from_ymd_opt(2021, 1, day).unwrap(),
                        nav.parse().unwrap(),
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn scales_excursions_from_the_first_nav() {
        let points = synthesize_benchmark(&series(&[(1, "100"), (4, "150")]), &BenchmarkConfig::default());
        assert_eq!(points[0].value, dec!(100.00));
        assert_eq!(points[1].value, dec!(120.00));
    }

    #[test]
    fn clamps_to_the_floor() {
        let points = synthesize_benchmark(&series(&[(1, "200"), (4, "50")]), &BenchmarkConfig::default());
        // 100 + (50 - 200) * 0.4 = 40, clamped to 50
        assert_eq!(points[1].value, dec!(50));
    }

    #[test]
    fn aligns_dates_one_to_one() {
        let nav = series(&[(1, "100"), (2, "101"), (5, "103")]);
        let points = synthesize_benchmark(&nav, &BenchmarkConfig::default());
        let nav_dates: Vec<NaiveDate> = nav.points.iter().map(|p| p.date).collect();
        let benchmark_dates: Vec<NaiveDate> = points.iter().map(|p| p.date).collect();
        assert_eq!(nav_dates, benchmark_dates);
    }

    #[test]
    fn empty_series_yields_no_points() {
        let empty = annotate_drawdowns(Vec::new());
        assert!(synthesize_benchmark(&empty, &BenchmarkConfig::default()).is_empty());
    }
}
