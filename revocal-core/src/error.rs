//! Error types for the revocal core.

use thiserror::Error;

/// Errors that can occur in calendar operations.
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown language '{0}'")]
    UnknownLanguage(String),

    #[error("Unknown timezone '{0}'")]
    UnknownTimezone(String),

    #[error("Day {day} is out of range (1..={max})")]
    DayOutOfRange { day: u32, max: u32 },

    #[error("Month {0} is out of range (0..=11)")]
    InvalidMonth(u32),

    #[error("Year {year} moved by {delta} is out of range")]
    YearOutOfRange { year: i32, delta: i32 },

    #[error("Event index {index} is out of range ({count} events on this day)")]
    EventOutOfRange { index: usize, count: usize },

    #[error("Action '{0}' is disabled by configuration")]
    ActionDisabled(&'static str),

    #[error("No event is selected")]
    NoEventSelected,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for calendar operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
