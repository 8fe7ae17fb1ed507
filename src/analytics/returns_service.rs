use chrono::{Datelike, Duration, Months, NaiveDate};
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::constants::METRIC_DECIMAL_PRECISION;

use super::analytics_model::{NavPoint, NavSeries, ReturnsSnapshot};
use super::lookup::nearest_on_or_before;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);

/// Derives the fixed set of trailing metrics, anchored at the last point.
///
/// Every calendar lookback resolves its reference index through the
/// nearest-on-or-before lookup; a lookback that reaches past the start of
/// the series yields 0.00 rather than an error. For series shorter than a
/// window this conflates "no change" with "insufficient history"; the
/// behavior is kept for contract stability. DD and MAXDD are recomputed
/// here with their own running-peak pass so the calculator works on any
/// date-aligned value sequence, annotated or not.
pub fn calculate_trailing_returns(series: &NavSeries) -> ReturnsSnapshot {
    let points = &series.points;
    let Some(last) = points.last() else {
        return ReturnsSnapshot::default();
    };
    let dates: Vec<NaiveDate> = points.iter().map(|point| point.date).collect();
    let last_idx = points.len() - 1;
    let last_date = last.date;
    let last_nav = last.nav;

    let one_day = if last_idx > 0 {
        simple_return(last_nav, points[last_idx - 1].nav)
    } else {
        Decimal::ZERO
    };

    let one_week = lookback_return(points, &dates, last_nav, Some(last_date - Duration::days(7)));
    let one_month = lookback_return(points, &dates, last_nav, months_back(last_date, 1));
    let three_months = lookback_return(points, &dates, last_nav, months_back(last_date, 3));
    let six_months = lookback_return(points, &dates, last_nav, months_back(last_date, 6));
    let one_year = lookback_return(points, &dates, last_nav, months_back(last_date, 12));

    let three_years = months_back(last_date, 36)
        .and_then(|target| nearest_on_or_before(&dates, target))
        .map(|idx| {
            annualized_return(
                last_nav,
                points[idx].nav,
                years_between(points[idx].date, last_date),
            )
        })
        .unwrap_or(Decimal::ZERO);

    let since_inception = annualized_return(
        last_nav,
        points[0].nav,
        years_between(points[0].date, last_date),
    );

    let ytd = points
        .iter()
        .find(|point| point.date.year() == last_date.year())
        .map(|point| simple_return(last_nav, point.nav))
        .unwrap_or(Decimal::ZERO);

    let (current_drawdown, max_drawdown) = drawdown_extremes(points);

    ReturnsSnapshot {
        ytd,
        one_day,
        one_week,
        one_month,
        three_months,
        six_months,
        one_year,
        three_years,
        since_inception,
        current_drawdown,
        max_drawdown,
    }
}

/// Simple return `(curr/prev - 1) * 100`, 0 when `prev` is not positive
fn simple_return(curr: Decimal, prev: Decimal) -> Decimal {
    if prev > Decimal::ZERO {
        ((curr / prev - Decimal::ONE) * PERCENT).round_dp(METRIC_DECIMAL_PRECISION)
    } else {
        Decimal::ZERO
    }
}

/// Compound annualized return `((curr/base)^(1/years) - 1) * 100`,
/// 0 when the base or the span cannot support the growth exponent
fn annualized_return(curr: Decimal, base: Decimal, years: Decimal) -> Decimal {
    if base > Decimal::ZERO && curr > Decimal::ZERO && years > Decimal::ZERO {
        let growth = (curr / base).powd(Decimal::ONE / years);
        ((growth - Decimal::ONE) * PERCENT).round_dp(METRIC_DECIMAL_PRECISION)
    } else {
        Decimal::ZERO
    }
}

/// True calendar-month subtraction; chrono clamps day overflow to the
/// month end (e.g. Mar 31 - 1M = Feb 28/29)
fn months_back(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_sub_months(Months::new(months))
}

/// Whole-month difference divided by twelve, ignoring day-of-month
fn years_between(from: NaiveDate, to: NaiveDate) -> Decimal {
    let months =
        (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32);
    Decimal::from(months) / MONTHS_PER_YEAR
}

fn lookback_return(
    points: &[NavPoint],
    dates: &[NaiveDate],
    last_nav: Decimal,
    target: Option<NaiveDate>,
) -> Decimal {
    target
        .and_then(|t| nearest_on_or_before(dates, t))
        .map(|idx| simple_return(last_nav, points[idx].nav))
        .unwrap_or(Decimal::ZERO)
}

/// Running-peak pass over the raw values, independent of any drawdown
/// annotation already present on the points
fn drawdown_extremes(points: &[NavPoint]) -> (Decimal, Decimal) {
    let mut peak: Option<Decimal> = None;
    let mut current = Decimal::ZERO;
    let mut worst = Decimal::ZERO;
    for point in points {
        let high = match peak {
            Some(max) => max.max(point.nav),
            None => point.nav,
        };
        peak = Some(high);
        current = if high > Decimal::ZERO {
            ((point.nav - high) / high * PERCENT).round_dp(METRIC_DECIMAL_PRECISION)
        } else {
            Decimal::ZERO
        };
        worst = worst.min(current);
    }
    (current, worst)
}
