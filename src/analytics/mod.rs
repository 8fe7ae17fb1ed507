pub(crate) mod analytics_model;
pub(crate) mod analytics_service;
pub(crate) mod benchmark_service;
pub(crate) mod drawdown_service;
pub(crate) mod lookup;
pub(crate) mod returns_service;

pub use analytics_model::{
    BenchmarkConfig, BenchmarkPoint, NavPoint, NavSeries, ReturnsComparison, ReturnsSnapshot,
};
pub use analytics_service::AnalyticsService;
pub use benchmark_service::{synthesize_benchmark, BenchmarkFeed, SyntheticBenchmark};
pub use drawdown_service::annotate_drawdowns;
pub use lookup::nearest_on_or_before;
pub use returns_service::calculate_trailing_returns;
