//! Date and time formatting for panel headers and event rows.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::labels::LabelSet;

pub const DEFAULT_DETAIL_DATE_FORMAT: &str = "DD/MM/YYYY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Year4,
    Year2,
    MonthName,
    MonthShort,
    Month2,
    Month,
    DayName,
    DayShort,
    DayMin,
    Day2,
    Day,
    Ordinal,
}

// Longest tokens first so "MMMM" is not read as four "M"s
const TOKENS: [(&str, Token); 12] = [
    ("YYYY", Token::Year4),
    ("YY", Token::Year2),
    ("MMMM", Token::MonthName),
    ("MMM", Token::MonthShort),
    ("MM", Token::Month2),
    ("M", Token::Month),
    ("dddd", Token::DayName),
    ("ddd", Token::DayShort),
    ("dd", Token::DayMin),
    ("DD", Token::Day2),
    ("D", Token::Day),
    ("nth", Token::Ordinal),
];

/// Format `date` with a pattern such as `DD/MM/YYYY` or `dddd, MMMM nth, YYYY`.
///
/// Recognized tokens: `YYYY`, `YY`, `MMMM`, `MMM`, `MM`, `M`, `dddd`, `ddd`,
/// `dd`, `DD`, `D` and `nth` (day of month with an ordinal suffix). Anything
/// else is copied verbatim.
pub fn format_date(date: NaiveDate, pattern: &str, labels: &LabelSet) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut rest = pattern;

    while let Some(ch) = rest.chars().next() {
        match TOKENS.iter().find(|(text, _)| rest.starts_with(text)) {
            Some((text, token)) => {
                push_token(&mut out, *token, date, labels);
                rest = &rest[text.len()..];
            }
            None => {
                out.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }

    out
}

fn push_token(out: &mut String, token: Token, date: NaiveDate, labels: &LabelSet) {
    let weekday = date.weekday().num_days_from_sunday() as usize;
    let month = date.month0() as usize;

    match token {
        Token::Year4 => out.push_str(&format!("{:04}", date.year())),
        Token::Year2 => out.push_str(&format!("{:02}", date.year().rem_euclid(100))),
        Token::MonthName => out.push_str(&labels.months[month]),
        Token::MonthShort => out.push_str(&labels.months_short[month]),
        Token::Month2 => out.push_str(&format!("{:02}", date.month())),
        Token::Month => out.push_str(&date.month().to_string()),
        Token::DayName => out.push_str(&labels.days[weekday]),
        Token::DayShort => out.push_str(&labels.days_short[weekday]),
        Token::DayMin => out.push_str(&labels.days_min[weekday]),
        Token::Day2 => out.push_str(&format!("{:02}", date.day())),
        Token::Day => out.push_str(&date.day().to_string()),
        Token::Ordinal => {
            out.push_str(&date.day().to_string());
            out.push_str(ordinal_suffix(date.day()));
        }
    }
}

/// English ordinal suffix: 1st, 2nd, 3rd, 4th, 11th, 12th, 13th, 21st ...
pub fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// `18:05` in 24-hour mode, `6:05 PM` otherwise.
pub fn format_time(time: NaiveTime, use_24h: bool) -> String {
    if use_24h {
        return format!("{:02}:{:02}", time.hour(), time.minute());
    }

    let (pm, hour) = time.hour12();
    format!("{}:{:02} {}", hour, time.minute(), if pm { "PM" } else { "AM" })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_pattern() {
        let labels = LabelSet::english();
        assert_eq!(format_date(date(2024, 12, 1), DEFAULT_DETAIL_DATE_FORMAT, &labels), "01/12/2024");
    }

    #[test]
    fn test_long_pattern_with_ordinal() {
        let labels = LabelSet::english();
        assert_eq!(
            format_date(date(2024, 12, 1), "dddd, MMMM nth, YYYY", &labels),
            "Sunday, December 1st, 2024"
        );
        assert_eq!(
            format_date(date(2024, 12, 23), "ddd D MMM YY", &labels),
            "Mon 23 Dec 24"
        );
    }

    #[test]
    fn test_literals_pass_through() {
        let labels = LabelSet::english();
        assert_eq!(format_date(date(2025, 3, 7), "M-D @ dd", &labels), "3-7 @ Fr");
    }

    #[test]
    fn test_ordinal_suffixes() {
        let suffixes: Vec<_> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 23, 31]
            .iter()
            .map(|&n| ordinal_suffix(n))
            .collect();
        assert_eq!(
            suffixes,
            vec!["st", "nd", "rd", "th", "th", "th", "th", "st", "nd", "rd", "st"]
        );
    }

    #[test]
    fn test_format_time() {
        let evening = NaiveTime::from_hms_opt(18, 5, 0).unwrap();
        let midnight = NaiveTime::from_hms_opt(0, 30, 0).unwrap();
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();

        assert_eq!(format_time(evening, true), "18:05");
        assert_eq!(format_time(evening, false), "6:05 PM");
        assert_eq!(format_time(midnight, false), "12:30 AM");
        assert_eq!(format_time(noon, false), "12:00 PM");
    }
}
