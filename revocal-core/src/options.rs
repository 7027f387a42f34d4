//! Presentation options recognized by the widget.
//!
//! Every field has the default the widget ships with, so an empty table
//! deserializes into a usable configuration.

use std::collections::HashMap;
use std::time::Duration;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::format::DEFAULT_DETAIL_DATE_FORMAT;
use crate::labels::{DEFAULT_LANG, LabelSet, Languages};
use crate::panel::PanelPolicy;
use crate::zone::Zone;
use crate::error::CalendarResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarOptions {
    pub lang: String,
    pub highlight_today: bool,

    pub primary_color: String,
    pub secondary_color: String,
    pub today_color: String,
    pub text_color: String,
    pub indicator_color: String,

    /// Panel animation duration in milliseconds
    pub animation_speed: u64,
    pub sidebar_width: u32,
    pub detail_width: u32,

    pub show_detail_toggler: bool,
    pub detail_default: bool,
    pub show_sidebar_toggler: bool,
    pub sidebar_default: bool,
    pub one_panel_at_a_time: bool,
    pub open_details_on_date_selection: bool,

    pub allow_delete_event: bool,
    pub allow_add_event: bool,

    pub time_format_24: bool,
    pub show_all_day_label: bool,
    pub detail_date_format: String,

    /// Initial selection as `YYYY-MM-DD`; today when absent or invalid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub week_start: Weekday,
    /// IANA timezone name; the system zone when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// Event indicators shown per day cell
    pub event_grid_rows: u32,
    pub event_grid_cols: u32,

    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub languages: HashMap<String, LabelSet>,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        CalendarOptions {
            lang: DEFAULT_LANG.to_string(),
            highlight_today: true,
            primary_color: "#4F6995".into(),
            secondary_color: "#c4dce9".into(),
            today_color: "#3B3966".into(),
            text_color: "#333333".into(),
            indicator_color: "orange".into(),
            animation_speed: 300,
            sidebar_width: 180,
            detail_width: 280,
            show_detail_toggler: true,
            detail_default: true,
            show_sidebar_toggler: true,
            sidebar_default: true,
            one_panel_at_a_time: false,
            open_details_on_date_selection: true,
            allow_delete_event: false,
            allow_add_event: false,
            time_format_24: true,
            show_all_day_label: false,
            detail_date_format: DEFAULT_DETAIL_DATE_FORMAT.into(),
            date: None,
            week_start: Weekday::Sun,
            timezone: None,
            event_grid_rows: 2,
            event_grid_cols: 3,
            languages: HashMap::new(),
        }
    }
}

impl CalendarOptions {
    pub fn panel_policy(&self) -> PanelPolicy {
        PanelPolicy {
            one_panel_at_a_time: self.one_panel_at_a_time,
            open_details_on_date_selection: self.open_details_on_date_selection,
            animation_speed: Duration::from_millis(self.animation_speed),
        }
    }

    pub fn zone(&self) -> CalendarResult<Zone> {
        match &self.timezone {
            Some(name) => name.parse(),
            None => Ok(Zone::Local),
        }
    }

    pub fn languages(&self) -> Languages {
        Languages::with_extra(&self.languages)
    }

    /// Maximum number of event indicators in one day cell.
    pub fn indicators_per_day(&self) -> usize {
        (self.event_grid_rows as usize).saturating_mul(self.event_grid_cols as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_uses_widget_defaults() {
        let options: CalendarOptions = toml::from_str("").unwrap();
        assert_eq!(options, CalendarOptions::default());
        assert_eq!(options.indicators_per_day(), 6);
    }

    #[test]
    fn test_partial_table_overrides() {
        let options: CalendarOptions = toml::from_str(
            r#"
lang = "pt"
sidebar_width = 200
week_start = "monday"
timezone = "Europe/Lisbon"
"#,
        )
        .unwrap();

        assert_eq!(options.lang, "pt");
        assert_eq!(options.sidebar_width, 200);
        assert_eq!(options.week_start, Weekday::Mon);
        assert_eq!(options.zone().unwrap(), Zone::Named(chrono_tz::Europe::Lisbon));
        assert_eq!(options.detail_width, 280);
    }

    #[test]
    fn test_panel_policy() {
        let options = CalendarOptions {
            animation_speed: 150,
            one_panel_at_a_time: true,
            ..CalendarOptions::default()
        };
        let policy = options.panel_policy();
        assert_eq!(policy.animation_speed, Duration::from_millis(150));
        assert!(policy.one_panel_at_a_time);
        assert!(policy.open_details_on_date_selection);
    }
}
