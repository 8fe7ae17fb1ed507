/// Decimal precision for reported percentage metrics
pub const METRIC_DECIMAL_PRECISION: u32 = 2;

/// Earliest calendar year retained during ingestion
pub const DEFAULT_MIN_YEAR: i32 = 2019;
