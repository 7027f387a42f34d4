//! Timezone used to extract calendar dates from event timestamps.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::CalendarError;

/// The zone in which "same day" and "today" are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    /// The system's local timezone
    #[default]
    Local,
    /// A named IANA timezone
    Named(Tz),
}

impl Zone {
    /// Calendar date of a millisecond timestamp in this zone.
    ///
    /// Returns `None` for timestamps chrono cannot represent.
    pub fn date_of_millis(&self, timestamp_millis: i64) -> Option<NaiveDate> {
        let utc = DateTime::<Utc>::from_timestamp_millis(timestamp_millis)?;
        Some(self.date_of(&utc))
    }

    /// Wall-clock date and time of a UTC instant in this zone.
    pub fn local_of(&self, instant: &DateTime<Utc>) -> NaiveDateTime {
        match self {
            Zone::Local => instant.with_timezone(&Local).naive_local(),
            Zone::Named(tz) => instant.with_timezone(tz).naive_local(),
        }
    }

    /// Calendar date of a UTC instant in this zone.
    pub fn date_of(&self, instant: &DateTime<Utc>) -> NaiveDate {
        self.local_of(instant).date()
    }

    /// Today's date in this zone.
    pub fn today(&self) -> NaiveDate {
        self.date_of(&Utc::now())
    }

    /// Millisecond timestamp for a wall-clock time in this zone.
    ///
    /// Ambiguous times (DST fall-back) resolve to the earlier instant;
    /// nonexistent times (DST spring-forward gap) yield `None`.
    pub fn millis_at(&self, date: NaiveDate, hour: u32, min: u32, sec: u32, milli: u32) -> Option<i64> {
        let naive = date.and_hms_milli_opt(hour, min, sec, milli)?;
        let utc = match self {
            Zone::Local => Local.from_local_datetime(&naive).earliest()?.with_timezone(&Utc),
            Zone::Named(tz) => tz.from_local_datetime(&naive).earliest()?.with_timezone(&Utc),
        };
        Some(utc.timestamp_millis())
    }
}

impl FromStr for Zone {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("local") {
            return Ok(Zone::Local);
        }
        s.parse::<Tz>()
            .map(Zone::Named)
            .map_err(|_| CalendarError::UnknownTimezone(s.to_string()))
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Local => write!(f, "local"),
            Zone::Named(tz) => write!(f, "{}", tz.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_zone() {
        let zone: Zone = "America/New_York".parse().unwrap();
        assert_eq!(zone, Zone::Named(chrono_tz::America::New_York));
        assert_eq!(zone.to_string(), "America/New_York");
    }

    #[test]
    fn test_parse_local_and_unknown() {
        assert_eq!("local".parse::<Zone>().unwrap(), Zone::Local);
        assert!(matches!(
            "Mars/Olympus".parse::<Zone>(),
            Err(CalendarError::UnknownTimezone(_))
        ));
    }

    #[test]
    fn test_late_evening_stays_on_local_day() {
        // 23:30 in New York is already the next day in UTC
        let zone = Zone::Named(chrono_tz::America::New_York);
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let millis = zone.millis_at(date, 23, 30, 0, 0).unwrap();
        assert_eq!(zone.date_of_millis(millis), Some(date));
    }
}
