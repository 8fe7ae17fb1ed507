use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::METRIC_DECIMAL_PRECISION;

use super::analytics_model::{NavPoint, NavSeries};

/// Annotates a sorted `(date, nav)` sequence with per-point drawdowns.
///
/// Single forward pass: the running peak only ever rises, so every
/// drawdown is `<= 0`. The series-wide maximum drawdown is the running
/// minimum of the per-point values, and the current drawdown is the last
/// point's. An empty input yields an empty series with zero drawdowns.
pub fn annotate_drawdowns(rows: Vec<(NaiveDate, Decimal)>) -> NavSeries {
    let mut running_max: Option<Decimal> = None;
    let mut current_drawdown = Decimal::ZERO;
    let mut max_drawdown = Decimal::ZERO;
    let mut points = Vec::with_capacity(rows.len());

    for (date, nav) in rows {
        let peak = match running_max {
            Some(max) => max.max(nav),
            None => nav,
        };
        running_max = Some(peak);

        let drawdown = if peak > Decimal::ZERO {
            ((nav - peak) / peak * dec!(100)).round_dp(METRIC_DECIMAL_PRECISION)
        } else {
            Decimal::ZERO
        };
        current_drawdown = drawdown;
        max_drawdown = max_drawdown.min(drawdown);
        points.push(NavPoint {
            date,
            nav,
            drawdown,
        });
    }

    NavSeries {
        points,
        current_drawdown,
        max_drawdown,
    }
}
