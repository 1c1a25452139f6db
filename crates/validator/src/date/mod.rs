//! Calendar rules on the proleptic Gregorian calendar.
//!
//! Dates are [`chrono::NaiveDate`]. Out-of-range months and days are
//! programmer errors on typed parameters, so they are reported through
//! [`DateRuleError`] rather than folded into a boolean.
//!
//! ```
//! use veritas_validator::date::{days_in_month, is_leap_year};
//!
//! assert!(is_leap_year(2000));
//! assert!(!is_leap_year(1900));
//! assert_eq!(days_in_month(2024, 2).unwrap(), 29);
//! assert!(days_in_month(2024, 13).is_err());
//! ```

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Invalid calendar parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DateRuleError {
    #[error("month {month} is out of range 1..=12")]
    InvalidMonth { month: u32 },

    #[error("day {day} is out of range 1..={max} for {year:04}-{month:02}")]
    InvalidDay {
        year: i32,
        month: u32,
        day: u32,
        max: u32,
    },
}

/// Gregorian leap year: divisible by 4, and either not by 100 or by 400.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` of `year`.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, DateRuleError> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 if is_leap_year(year) => Ok(29),
        2 => Ok(28),
        _ => Err(DateRuleError::InvalidMonth { month }),
    }
}

/// Whether `date` is the 1st of its month.
#[must_use]
pub fn is_first_day_of_month(date: NaiveDate) -> bool {
    date.day() == 1
}

/// Whether `date` is the last day of its month.
#[must_use]
pub fn is_last_day_of_month(date: NaiveDate) -> bool {
    days_in_month(date.year(), date.month()).is_ok_and(|max| date.day() == max)
}

/// Builds a date, rejecting out-of-range months and days instead of
/// clamping them.
pub fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, DateRuleError> {
    let max = days_in_month(year, month)?;
    if day == 0 || day > max {
        return Err(DateRuleError::InvalidDay {
            year,
            month,
            day,
            max,
        });
    }
    // Only years beyond chrono's supported range fail here.
    NaiveDate::from_ymd_opt(year, month, day).ok_or(DateRuleError::InvalidDay {
        year,
        month,
        day,
        max,
    })
}

/// Whether `year-month-day` names a real calendar day.
#[must_use]
pub fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
    date(year, month, day).is_ok()
}

/// Day of the week of `date`.
#[must_use]
pub fn weekday(date: NaiveDate) -> Weekday {
    date.weekday()
}

/// Saturday or Sunday.
#[must_use]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The 1st of `date`'s month.
#[must_use]
pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// The last day of `date`'s month.
#[must_use]
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let max = days_in_month(date.year(), date.month()).unwrap_or_else(|_| date.day());
    date + Days::new(u64::from(max - date.day()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[rstest]
    #[case(2000, true)]
    #[case(1900, false)]
    #[case(2024, true)]
    #[case(2023, false)]
    #[case(2100, false)]
    #[case(2400, true)]
    #[case(0, true)]
    #[case(-4, true)]
    fn leap_years(#[case] year: i32, #[case] expected: bool) {
        assert_eq!(is_leap_year(year), expected);
        assert_eq!(NaiveDate::from_ymd_opt(year, 2, 29).is_some(), expected);
    }

    #[rstest]
    #[case(2024, 2, 29)]
    #[case(2023, 2, 28)]
    #[case(1900, 2, 28)]
    #[case(2023, 1, 31)]
    #[case(2023, 4, 30)]
    #[case(2023, 12, 31)]
    fn month_lengths(#[case] year: i32, #[case] month: u32, #[case] expected: u32) {
        assert_eq!(days_in_month(year, month), Ok(expected));
    }

    #[rstest]
    #[case(0)]
    #[case(13)]
    fn month_out_of_range(#[case] month: u32) {
        assert_eq!(
            days_in_month(2024, month),
            Err(DateRuleError::InvalidMonth { month })
        );
    }

    #[test]
    fn first_and_last_day() {
        assert!(is_first_day_of_month(ymd(2024, 3, 1)));
        assert!(!is_first_day_of_month(ymd(2024, 3, 2)));
        assert!(is_last_day_of_month(ymd(2024, 2, 29)));
        assert!(!is_last_day_of_month(ymd(2024, 2, 28)));
        assert!(is_last_day_of_month(ymd(2023, 2, 28)));

        assert_eq!(first_day_of_month(ymd(2024, 2, 17)), ymd(2024, 2, 1));
        assert_eq!(last_day_of_month(ymd(2024, 2, 17)), ymd(2024, 2, 29));
        assert_eq!(last_day_of_month(ymd(2023, 12, 31)), ymd(2023, 12, 31));
    }

    #[test]
    fn building_dates() {
        assert_eq!(date(2024, 2, 29), Ok(ymd(2024, 2, 29)));
        assert_eq!(
            date(2023, 2, 29),
            Err(DateRuleError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29,
                max: 28
            })
        );
        assert!(!is_valid_date(2023, 4, 0));
        assert!(!is_valid_date(2023, 13, 1));
        assert!(is_valid_date(2023, 4, 30));
    }

    #[test]
    fn weekdays() {
        assert_eq!(weekday(ymd(2024, 1, 1)), Weekday::Mon);
        assert!(is_weekend(ymd(2024, 1, 6)));
        assert!(is_weekend(ymd(2024, 1, 7)));
        assert!(!is_weekend(ymd(2024, 1, 8)));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            DateRuleError::InvalidMonth { month: 13 }.to_string(),
            "month 13 is out of range 1..=12"
        );
        assert_eq!(
            DateRuleError::InvalidDay {
                year: 2023,
                month: 2,
                day: 30,
                max: 28
            }
            .to_string(),
            "day 30 is out of range 1..=28 for 2023-02"
        );
    }
}
