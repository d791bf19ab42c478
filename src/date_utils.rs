use chrono::{Datelike, NaiveDate};

/// An inclusive calendar date interval used to bound aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Date-only containment check, both bounds inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Calendar-month-aligned window covering the last `months` months, where the
/// final month is `offset_months` months before `today`'s month.
///
/// `end` is the last day of the offset month; `start` is the first day of the
/// month `months - 1` months earlier. `month_window(today, 1, 0)` is exactly
/// `today`'s calendar month. Callers validate `months >= 1`.
pub fn month_window(today: NaiveDate, months: u32, offset_months: u32) -> DateRange {
    let end_month = shift_months(month_start(today), -(offset_months as i32));
    let start = shift_months(end_month, -(months as i32 - 1));
    DateRange {
        start,
        end: month_end(end_month),
    }
}

pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap()
}

pub fn month_end(date: NaiveDate) -> NaiveDate {
    let next_month = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    next_month.unwrap() - chrono::Duration::days(1)
}

/// Shift to the first day of the month `months` months away (negative = back).
pub fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let total_months = date.year() * 12 + date.month() as i32 - 1 + months;
    let new_year = total_months.div_euclid(12);
    let new_month = (total_months.rem_euclid(12) + 1) as u32;
    NaiveDate::from_ymd_opt(new_year, new_month, 1).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_single_month_window_is_current_month() {
        let window = month_window(d(2024, 6, 15), 1, 0);
        assert_eq!(window.start, d(2024, 6, 1));
        assert_eq!(window.end, d(2024, 6, 30));
    }

    #[test]
    fn test_window_spans_year_boundary() {
        let window = month_window(d(2024, 1, 15), 12, 0);
        assert_eq!(window.start, d(2023, 2, 1));
        assert_eq!(window.end, d(2024, 1, 31));
    }

    #[test]
    fn test_offset_window_precedes_current() {
        // Six months offset by six: the window immediately before the
        // six-month window ending in June 2024.
        let window = month_window(d(2024, 6, 15), 6, 6);
        assert_eq!(window.start, d(2023, 7, 1));
        assert_eq!(window.end, d(2023, 12, 31));
    }

    #[test]
    fn test_offset_crosses_year_backwards() {
        let window = month_window(d(2024, 1, 15), 1, 1);
        assert_eq!(window.start, d(2023, 12, 1));
        assert_eq!(window.end, d(2023, 12, 31));
    }

    #[test]
    fn test_month_end_leap_february() {
        assert_eq!(month_end(d(2024, 2, 10)), d(2024, 2, 29));
        assert_eq!(month_end(d(2023, 2, 10)), d(2023, 2, 28));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let window = month_window(d(2024, 6, 15), 1, 0);
        assert!(window.contains(d(2024, 6, 1)));
        assert!(window.contains(d(2024, 6, 30)));
        assert!(!window.contains(d(2024, 5, 31)));
        assert!(!window.contains(d(2024, 7, 1)));
    }

    #[test]
    fn test_shift_months_negative_across_years() {
        assert_eq!(shift_months(d(2024, 2, 20), -14), d(2022, 12, 1));
        assert_eq!(shift_months(d(2024, 11, 3), 2), d(2025, 1, 1));
    }
}
