//! Configuration file loading.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat, Map};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};
use crate::options::CalendarOptions;

const ENV_PREFIX: &str = "REVOCAL";

/// Configuration at ~/.config/revocal/config.toml
///
/// Widget options live under `[calendar]`. Any key can be overridden
/// from the environment, e.g. `REVOCAL_CALENDAR__SIDEBAR_WIDTH=200`.
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct RevocalConfig {
    /// JSON file with the events to display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events_file: Option<String>,

    #[serde(default)]
    pub calendar: CalendarOptions,
}

impl RevocalConfig {
    pub fn config_path() -> CalendarResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalendarError::Config("Could not determine config directory".into()))?
            .join("revocal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from `path` (optional on disk) layered under environment overrides.
    pub fn load(path: &Path) -> CalendarResult<Self> {
        Self::load_with_env(path, None)
    }

    /// Like [`load`](Self::load), reading overrides from `env` instead of
    /// the process environment when given.
    fn load_with_env(path: &Path, env: Option<Map<String, String>>) -> CalendarResult<Self> {
        Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()
            .map_err(|e| CalendarError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalendarError::Config(e.to_string()))
    }

    /// Load the default config file, creating a commented template first
    /// if none exists.
    pub fn load_default() -> CalendarResult<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            Self::create_default_config(&path)?;
        }
        Self::load(&path)
    }

    /// The events file with `~` expanded.
    pub fn events_path(&self) -> Option<PathBuf> {
        self.events_file
            .as_deref()
            .map(|p| PathBuf::from(shellexpand::tilde(p).into_owned()))
    }

    pub fn save(&self, path: &Path) -> CalendarResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| CalendarError::Serialization(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalendarResult<()> {
        let defaults = CalendarOptions::default();
        let contents = format!(
            "\
# revocal configuration

# JSON file with events to show:
# events_file = \"~/calendar/events.json\"

[calendar]
# lang = \"{lang}\"
# week_start = \"sunday\"
# timezone = \"Europe/Lisbon\"
# sidebar_width = {sidebar}
# detail_width = {detail}
# animation_speed = {speed}
# one_panel_at_a_time = false
# open_details_on_date_selection = true
# detail_date_format = \"{format}\"
",
            lang = defaults.lang,
            sidebar = defaults.sidebar_width,
            detail = defaults.detail_width,
            speed = defaults.animation_speed,
            format = defaults.detail_date_format,
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalendarError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalendarError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = RevocalConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.calendar, CalendarOptions::default());
        assert!(config.events_file.is_none());
    }

    #[test]
    fn test_default_template_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");

        RevocalConfig::create_default_config(&path).unwrap();
        let config = RevocalConfig::load(&path).unwrap();

        assert_eq!(config.calendar, CalendarOptions::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = RevocalConfig::default();
        config.calendar.sidebar_width = 240;
        config.calendar.allow_add_event = true;
        config.events_file = Some("events.json".into());

        config.save(&path).unwrap();
        let loaded = RevocalConfig::load(&path).unwrap();

        assert_eq!(loaded.calendar.sidebar_width, 240);
        assert!(loaded.calendar.allow_add_event);
        assert_eq!(loaded.events_path(), Some(PathBuf::from("events.json")));
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[calendar]\nsidebar_width = 240\ndetail_width = 300\n").unwrap();

        let env = Map::from([
            ("REVOCAL_CALENDAR__SIDEBAR_WIDTH".to_string(), "200".to_string()),
            ("REVOCAL_CALENDAR__ALLOW_ADD_EVENT".to_string(), "true".to_string()),
        ]);
        let config = RevocalConfig::load_with_env(&path, Some(env)).unwrap();

        assert_eq!(config.calendar.sidebar_width, 200);
        assert_eq!(config.calendar.detail_width, 300);
        assert!(config.calendar.allow_add_event);
    }
}
