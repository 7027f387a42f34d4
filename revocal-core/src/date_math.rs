//! Calendar arithmetic for the month grid.
//!
//! Months are zero-based (0 = January .. 11 = December) throughout the
//! widget API. Passing a month outside that range is a caller bug and
//! panics.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::zone::Zone;

const DAYS_PER_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Offsets used by Sakamoto's day-of-week method, indexed by zero-based month.
const SAKAMOTO: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

fn check_month(month: u32) {
    assert!(month < 12, "month {month} out of range (0..=11)");
}

/// Gregorian leap year: divisible by 4, except centuries not divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` of `year`.
///
/// # Panics
///
/// Panics if `month > 11`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    check_month(month);
    if month == 1 && is_leap_year(year) {
        29
    } else {
        DAYS_PER_MONTH[month as usize]
    }
}

/// Weekday of the first day of the month, 0 = Sunday .. 6 = Saturday.
fn first_weekday_from_sunday(year: i32, month: u32) -> u32 {
    let y = if month < 2 { year as i64 - 1 } else { year as i64 };
    let dow = y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400) + SAKAMOTO[month as usize] + 1;
    dow.rem_euclid(7) as u32
}

/// Grid column (0..=6) of the first day of the month when the grid's
/// first column is `week_start`.
///
/// With a Sunday start this is the plain weekday index, 0 = Sunday.
///
/// # Panics
///
/// Panics if `month > 11`.
pub fn first_weekday_offset(year: i32, month: u32, week_start: Weekday) -> u32 {
    check_month(month);
    let first = first_weekday_from_sunday(year, month);
    (first + 7 - week_start.num_days_from_sunday()) % 7
}

/// Whether `timestamp_millis` falls on the given day, using the date as
/// seen in `zone` (not millisecond truncation).
///
/// # Panics
///
/// Panics if `month > 11`.
pub fn is_same_day(timestamp_millis: i64, zone: &Zone, year: i32, month: u32, day: u32) -> bool {
    check_month(month);
    zone.date_of_millis(timestamp_millis)
        .is_some_and(|date| matches_date(date, year, month, day))
}

/// Whether the given day equals `today`, usually [`Zone::today`].
pub fn is_today_at(day: u32, month: u32, year: i32, today: NaiveDate) -> bool {
    check_month(month);
    matches_date(today, year, month, day)
}

fn matches_date(date: NaiveDate, year: i32, month: u32, day: u32) -> bool {
    date.year() == year && date.month0() == month && date.day() == day
}

/// Convert a widget date into a `NaiveDate`, if it denotes a real day.
pub fn to_naive(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month.checked_add(1)?, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    #[test]
    fn test_february_lengths() {
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(1900, 1), 28);
        assert_eq!(days_in_month(2000, 1), 29);
        assert_eq!(days_in_month(2023, 1), 28);
    }

    #[test]
    fn test_days_in_month_matches_chrono_for_many_years() {
        for year in 1590..2430 {
            for month in 0..12 {
                let first = NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap();
                let next = if month == 11 {
                    NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
                } else {
                    NaiveDate::from_ymd_opt(year, month + 2, 1).unwrap()
                };
                let expected = (next - first).num_days() as u32;
                assert_eq!(days_in_month(year, month), expected, "{year}-{month}");
            }
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_invalid_month_panics() {
        days_in_month(2024, 12);
    }

    #[test]
    fn test_december_2024_starts_on_sunday() {
        assert_eq!(first_weekday_offset(2024, 11, Weekday::Sun), 0);
        assert_eq!(first_weekday_offset(2024, 11, Weekday::Mon), 6);
    }

    #[test]
    fn test_first_weekday_offset_matches_chrono() {
        for year in [1899, 1900, 1970, 2000, 2023, 2024, 2100] {
            for month in 0..12 {
                let first = NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap();
                assert_eq!(
                    first_weekday_offset(year, month, Weekday::Sun),
                    first.weekday().num_days_from_sunday(),
                    "{year}-{month}"
                );
                assert_eq!(
                    first_weekday_offset(year, month, Weekday::Mon),
                    first.weekday().num_days_from_monday(),
                    "{year}-{month}"
                );
            }
        }
    }

    #[test]
    fn test_last_millisecond_of_day_stays_on_that_day() {
        let zones = [
            Zone::Named(chrono_tz::America::New_York),
            Zone::Named(chrono_tz::Europe::Berlin),
            Zone::Named(chrono_tz::Asia::Kolkata),
            Zone::Named(chrono_tz::Pacific::Auckland),
            Zone::Named(chrono_tz::UTC),
        ];
        // Includes days adjacent to DST switches in the northern and southern hemispheres
        let days = [(2024, 2, 10), (2024, 2, 31), (2024, 10, 3), (2024, 3, 7), (2024, 8, 29)];

        for zone in &zones {
            for &(year, month, day) in &days {
                let date = to_naive(year, month, day).unwrap();
                let millis = zone.millis_at(date, 23, 59, 59, 999).unwrap();
                assert!(is_same_day(millis, zone, year, month, day), "{zone} {date}");
                let next = date.succ_opt().unwrap();
                assert!(!is_same_day(millis, zone, next.year(), next.month0(), next.day()));
            }
        }
    }

    #[test]
    fn test_same_day_depends_on_zone() {
        // 2024-12-20T03:00:00Z is still Dec 19 in New York
        let instant: DateTime<Utc> = "2024-12-20T03:00:00Z".parse().unwrap();
        let millis = instant.timestamp_millis();
        let ny = Zone::Named(chrono_tz::America::New_York);
        let utc = Zone::Named(chrono_tz::UTC);
        assert!(is_same_day(millis, &ny, 2024, 11, 19));
        assert!(is_same_day(millis, &utc, 2024, 11, 20));
    }

    #[test]
    fn test_is_today_at() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
        assert!(is_today_at(14, 9, 2026, today));
        assert!(!is_today_at(14, 10, 2026, today));
        assert!(!is_today_at(15, 9, 2026, today));
    }

    #[test]
    fn test_to_naive_rejects_overflowing_day() {
        assert!(to_naive(2024, 1, 30).is_none());
        assert_eq!(to_naive(2024, 1, 29), NaiveDate::from_ymd_opt(2024, 2, 29));
    }
}
