//! Localized label tables.
//!
//! Only English ships with the crate. Other languages come from the
//! `languages` table in configuration and are merged over the built-in set.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};

pub const DEFAULT_LANG: &str = "en";

/// Every string the widget displays for one language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelSet {
    pub days: [String; 7],
    pub days_short: [String; 7],
    pub days_min: [String; 7],
    pub months: [String; 12],
    pub months_short: [String; 12],
    pub no_event_for_this_day: String,
    pub all_day: String,
    pub add_event: String,
    pub delete: String,
    pub event_time: String,
    pub previous_year: String,
    pub next_year: String,
    pub toggle_sidebar: String,
    pub toggle_details: String,
}

fn strings<const N: usize>(items: [&str; N]) -> [String; N] {
    items.map(String::from)
}

impl LabelSet {
    pub fn english() -> Self {
        LabelSet {
            days: strings([
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ]),
            days_short: strings(["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]),
            days_min: strings(["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]),
            months: strings([
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]),
            months_short: strings([
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ]),
            no_event_for_this_day: "There are no events for this day.".into(),
            all_day: "All day".into(),
            add_event: "Add event".into(),
            delete: "Delete".into(),
            event_time: "Event time".into(),
            previous_year: "Previous year".into(),
            next_year: "Next year".into(),
            toggle_sidebar: "Toggle sidebar".into(),
            toggle_details: "Toggle details".into(),
        }
    }
}

/// Label tables keyed by language code
#[derive(Debug, Clone)]
pub struct Languages {
    tables: HashMap<String, LabelSet>,
}

impl Default for Languages {
    fn default() -> Self {
        let mut tables = HashMap::new();
        tables.insert(DEFAULT_LANG.to_string(), LabelSet::english());
        Languages { tables }
    }
}

impl Languages {
    /// Built-in tables plus `extra`, where `extra` wins on conflicts.
    pub fn with_extra(extra: &HashMap<String, LabelSet>) -> Self {
        let mut languages = Languages::default();
        for (lang, labels) in extra {
            languages.tables.insert(lang.clone(), labels.clone());
        }
        languages
    }

    /// Labels for `lang`; an unknown code is an error rather than a silent fallback.
    pub fn labels(&self, lang: &str) -> CalendarResult<&LabelSet> {
        self.tables
            .get(lang)
            .ok_or_else(|| CalendarError::UnknownLanguage(lang.to_string()))
    }

    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        codes.sort();
        codes
    }
}
