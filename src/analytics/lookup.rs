use chrono::NaiveDate;

/// Index of the latest observation at or before `target`.
///
/// `dates` must be ascending and unique. An exact hit returns its own
/// index; otherwise the rightmost index strictly before the target is
/// returned, which is what lets calendar lookbacks tolerate weekends and
/// holidays. `None` means the target predates every known observation.
pub fn nearest_on_or_before(dates: &[NaiveDate], target: NaiveDate) -> Option<usize> {
    let idx = dates.partition_point(|date| *date <= target);
    idx.checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn exact_hit_returns_its_index() {
        let dates = vec![date(2020, 1, 2), date(2020, 1, 5), date(2020, 1, 9)];
        assert_eq!(nearest_on_or_before(&dates, date(2020, 1, 5)), Some(1));
    }

    #[test]
    fn gap_falls_back_to_most_recent_prior() {
        let dates = vec![date(2020, 1, 2), date(2020, 1, 5), date(2020, 1, 9)];
        assert_eq!(nearest_on_or_before(&dates, date(2020, 1, 7)), Some(1));
    }

    #[test]
    fn target_after_all_dates_returns_last() {
        let dates = vec![date(2020, 1, 2), date(2020, 1, 5)];
        assert_eq!(nearest_on_or_before(&dates, date(2021, 6, 1)), Some(1));
    }

    #[test]
    fn target_before_all_dates_is_not_found() {
        let dates = vec![date(2020, 1, 2), date(2020, 1, 5)];
        assert_eq!(nearest_on_or_before(&dates, date(2019, 12, 31)), None);
    }

    #[test]
    fn empty_index_is_not_found() {
        assert_eq!(nearest_on_or_before(&[], date(2020, 1, 1)), None);
    }
}
