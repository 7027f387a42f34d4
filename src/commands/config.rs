use std::path::PathBuf;

use anyhow::Result;
use owo_colors::OwoColorize;
use revocal_core::config::RevocalConfig;

pub fn run(config: Option<PathBuf>) -> Result<()> {
    let config_path = match config {
        Some(path) => path,
        None => RevocalConfig::config_path()?,
    };

    let created = !config_path.exists();
    if created {
        RevocalConfig::create_default_config(&config_path)?;
    }
    let loaded = RevocalConfig::load(&config_path)?;

    println!("{}", "Paths".bold());
    println!(
        "  Config:     {}{}",
        config_path.display(),
        if created { " (created)".green().to_string() } else { String::new() }
    );
    println!(
        "  Events:     {}",
        loaded
            .events_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none)".dimmed().to_string())
    );

    println!("{}", "Calendar".bold());
    let languages = loaded.calendar.languages();
    println!(
        "  Language:   {} (available: {})",
        loaded.calendar.lang,
        languages.codes().join(", ")
    );
    println!("  Timezone:   {}", loaded.calendar.zone()?);
    println!("  Week start: {}", loaded.calendar.week_start);
    println!(
        "  Panels:     sidebar {}px, detail {}px",
        loaded.calendar.sidebar_width, loaded.calendar.detail_width
    );

    Ok(())
}
