//! Loading event lists from disk.

use std::path::Path;

use anyhow::{Context, Result};
use revocal_core::CalendarEvent;

/// Read a JSON array of events.
pub fn load_events(path: &Path) -> Result<Vec<CalendarEvent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read events file {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Invalid events file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_events_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(
            &path,
            r#"[{"name": "Holiday Party", "date": 1734737400000,
                 "extra": {"icon": "M12 6v3", "text": "Office Event"}}]"#,
        )
        .unwrap();

        let events = load_events(&path).unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "Holiday Party");
        assert!(!events[0].all_day);
    }

    #[test]
    fn test_load_events_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_events(&path).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }
}
