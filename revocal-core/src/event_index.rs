//! Binding a flat event list to days of a month.

use std::collections::HashMap;

use chrono::Datelike;

use crate::date_math::{self, is_same_day};
use crate::event::CalendarEvent;
use crate::zone::Zone;

/// Events on the given day, in input order.
pub fn events_on_day<'a>(
    events: &'a [CalendarEvent],
    zone: &Zone,
    year: i32,
    month: u32,
    day: u32,
) -> Vec<&'a CalendarEvent> {
    events
        .iter()
        .filter(|event| is_same_day(event.timestamp_millis, zone, year, month, day))
        .collect()
}

/// Whether at least one event falls on the given day.
pub fn has_event(events: &[CalendarEvent], zone: &Zone, year: i32, month: u32, day: u32) -> bool {
    events
        .iter()
        .any(|event| is_same_day(event.timestamp_millis, zone, year, month, day))
}

/// Single-pass index of one month's events, keyed by day of month.
///
/// Each day holds positions into the original event slice, in input order,
/// so `events_for` returns the same sequence as [`events_on_day`].
#[derive(Debug, Default)]
pub struct MonthIndex {
    by_day: HashMap<u32, Vec<usize>>,
}

impl MonthIndex {
    pub fn build(events: &[CalendarEvent], zone: &Zone, year: i32, month: u32) -> Self {
        // Validates the month even when there are no events
        date_math::days_in_month(year, month);

        let mut by_day: HashMap<u32, Vec<usize>> = HashMap::new();
        for (position, event) in events.iter().enumerate() {
            let Some(date) = zone.date_of_millis(event.timestamp_millis) else {
                continue;
            };
            if date.year() == year && date.month0() == month {
                by_day.entry(date.day()).or_default().push(position);
            }
        }

        MonthIndex { by_day }
    }

    pub fn has_event(&self, day: u32) -> bool {
        self.by_day.contains_key(&day)
    }

    pub fn count(&self, day: u32) -> usize {
        self.by_day.get(&day).map_or(0, Vec::len)
    }

    pub fn events_for<'a>(&self, events: &'a [CalendarEvent], day: u32) -> Vec<&'a CalendarEvent> {
        self.by_day
            .get(&day)
            .map(|positions| positions.iter().filter_map(|&p| events.get(p)).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn zone() -> Zone {
        Zone::Named(chrono_tz::America::New_York)
    }

    fn at(day: u32, hour: u32, min: u32) -> i64 {
        let date = NaiveDate::from_ymd_opt(2024, 12, day).unwrap();
        zone().millis_at(date, hour, min, 0, 0).unwrap()
    }

    fn sample() -> Vec<CalendarEvent> {
        vec![
            CalendarEvent::new("Holiday Party", at(20, 18, 30)),
            CalendarEvent::new("Christmas Day", at(25, 0, 0)).all_day(),
            CalendarEvent::new("Late Review", at(23, 23, 0)),
            CalendarEvent::new("Early Review", at(23, 10, 0)),
            CalendarEvent::new("Next year", {
                let date = NaiveDate::from_ymd_opt(2025, 12, 23).unwrap();
                zone().millis_at(date, 10, 0, 0, 0).unwrap()
            }),
        ]
    }

    #[test]
    fn test_events_on_day_preserves_input_order() {
        let events = sample();
        let names: Vec<_> = events_on_day(&events, &zone(), 2024, 11, 23)
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["Late Review", "Early Review"]);
    }

    #[test]
    fn test_has_event() {
        let events = sample();
        assert!(has_event(&events, &zone(), 2024, 11, 25));
        assert!(!has_event(&events, &zone(), 2024, 11, 24));
        assert!(!has_event(&[], &zone(), 2024, 11, 25));
    }

    #[test]
    fn test_month_index_agrees_with_filter() {
        let events = sample();
        let index = MonthIndex::build(&events, &zone(), 2024, 11);

        for day in 1..=31 {
            assert_eq!(index.has_event(day), has_event(&events, &zone(), 2024, 11, day));
            assert_eq!(
                index.events_for(&events, day),
                events_on_day(&events, &zone(), 2024, 11, day)
            );
        }
        assert_eq!(index.count(23), 2);
    }

    #[test]
    fn test_month_index_ignores_other_years() {
        let events = sample();
        let index = MonthIndex::build(&events, &zone(), 2025, 11);
        assert_eq!(index.count(23), 1);
        assert!(!index.has_event(25));
    }
}
