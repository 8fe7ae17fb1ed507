use chrono::NaiveDate;

use super::analytics_model::{NavSeries, ReturnsComparison};
use super::benchmark_service::{BenchmarkFeed, SyntheticBenchmark};
use super::drawdown_service::annotate_drawdowns;
use super::returns_service::calculate_trailing_returns;

/// Orchestrates the per-series computations: one trailing-returns snapshot
/// for the fund and one for the comparison series its feed produces.
pub struct AnalyticsService {
    benchmark_feed: Box<dyn BenchmarkFeed>,
}

impl AnalyticsService {
    pub fn new(benchmark_feed: Box<dyn BenchmarkFeed>) -> Self {
        Self { benchmark_feed }
    }

    /// Computes both snapshots from a single NAV series. The benchmark
    /// values are run through the drawdown annotation pass first so the
    /// calculator sees a fully formed series on both sides.
    pub fn compute_returns_comparison(&self, series: &NavSeries) -> ReturnsComparison {
        let fund = calculate_trailing_returns(series);
        let benchmark_series = annotate_drawdowns(
            self.benchmark_feed
                .benchmark_for(series)
                .into_iter()
                .map(|point| (point.date, point.value))
                .collect(),
        );
        let benchmark = calculate_trailing_returns(&benchmark_series);
        ReturnsComparison { fund, benchmark }
    }

    /// Re-derives a series narrowed to `[from, to]`.
    ///
    /// Bounds are clamped to the series' own span, which also enforces
    /// `from <= to`. The result is a fresh series with drawdowns recomputed
    /// over the narrowed window, never a mutation of the input.
    pub fn filter_by_range(&self, series: &NavSeries, from: NaiveDate, to: NaiveDate) -> NavSeries {
        let Some((first, last)) = series.points.first().zip(series.points.last()) else {
            return NavSeries::default();
        };
        let from = from.clamp(first.date, last.date);
        let to = to.clamp(first.date, last.date).max(from);
        annotate_drawdowns(
            series
                .points
                .iter()
                .filter(|point| point.date >= from && point.date <= to)
                .map(|point| (point.date, point.nav))
                .collect(),
        )
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new(Box::new(SyntheticBenchmark::default()))
    }
}
