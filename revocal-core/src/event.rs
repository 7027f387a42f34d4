//! Calendar events supplied by the embedding application.
//!
//! The core never stores or mutates events. The caller owns the list and
//! passes it again on every snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A calendar event as displayed by the widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub name: String,
    /// Start instant in milliseconds since the Unix epoch
    #[serde(alias = "date")]
    pub timestamp_millis: i64,
    #[serde(default, alias = "allDay")]
    pub all_day: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<EventExtra>,
}

/// Optional decoration shown next to an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventExtra {
    /// SVG path data for the indicator icon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl CalendarEvent {
    pub fn new(name: impl Into<String>, timestamp_millis: i64) -> Self {
        CalendarEvent {
            name: name.into(),
            timestamp_millis,
            all_day: false,
            extra: None,
        }
    }

    pub fn all_day(mut self) -> Self {
        self.all_day = true;
        self
    }

    pub fn with_extra(mut self, extra: EventExtra) -> Self {
        self.extra = Some(extra);
        self
    }

    /// Start instant, if the timestamp is representable.
    pub fn start(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.timestamp_millis)
    }
}
