use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::ValueEnum;
use owo_colors::OwoColorize;
use revocal_core::config::RevocalConfig;
use revocal_core::{
    CalendarController, CalendarDate, CalendarEvent, CalendarHandler, CalendarSnapshot, PanelId,
};
use tracing::info;

use crate::events::load_events;
use crate::render::Render;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PanelArg {
    Sidebar,
    Detail,
}

impl From<PanelArg> for PanelId {
    fn from(arg: PanelArg) -> Self {
        match arg {
            PanelArg::Sidebar => PanelId::Sidebar,
            PanelArg::Detail => PanelId::Detail,
        }
    }
}

pub struct ShowArgs {
    pub config: Option<PathBuf>,
    pub events: Option<PathBuf>,
    pub date: Option<String>,
    pub lang: Option<String>,
    pub width: u32,
    pub year_delta: Option<i32>,
    pub select_month: Option<u32>,
    pub select_day: Option<u32>,
    pub toggle: Vec<PanelArg>,
    pub select_event: Option<usize>,
    pub json: bool,
}

/// Logs widget callbacks; the terminal has nowhere else to send them.
struct LogHandler;

impl CalendarHandler for LogHandler {
    fn date_selected(&mut self, date: CalendarDate) {
        info!(%date, "date selected");
    }

    fn event_selected(&mut self, index: usize) {
        info!(index, "event selected");
    }
}

pub fn run(args: ShowArgs) -> Result<()> {
    let json = args.json;
    let snapshot = replay(args)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}", snapshot.render());
    }

    Ok(())
}

/// Build the widget from config and replay the requested actions in order:
/// year, month, day, toggles, then event selection.
fn replay(args: ShowArgs) -> Result<CalendarSnapshot> {
    let config = match &args.config {
        Some(path) => RevocalConfig::load(path)?,
        None => RevocalConfig::load_default()?,
    };

    let mut options = config.calendar.clone();
    if let Some(date) = args.date {
        options.date = Some(date);
    }
    if let Some(lang) = args.lang {
        options.lang = lang;
    }

    let events: Vec<CalendarEvent> = match args.events.or_else(|| config.events_path()) {
        Some(path) => load_events(&path)?,
        None => Vec::new(),
    };

    let step = Duration::from_millis(options.animation_speed);
    let mut calendar = CalendarController::new(options, LogHandler, args.width)?;
    for warning in calendar.warnings() {
        eprintln!("{} {}", "warning:".yellow(), warning);
    }

    // Each action runs after the previous animation has finished
    let mut now = Instant::now();
    let mut settle = |calendar: &mut CalendarController<LogHandler>| {
        now += step;
        calendar.advance(now);
        now
    };

    if let Some(delta) = args.year_delta {
        calendar.select_year(delta)?;
    }
    if let Some(month) = args.select_month {
        let month0 = month
            .checked_sub(1)
            .context("Month must be between 1 and 12")?;
        calendar.select_month(month0)?;
    }
    if let Some(day) = args.select_day {
        let at = settle(&mut calendar);
        calendar.select_day(day, at)?;
    }
    for panel in args.toggle {
        let at = settle(&mut calendar);
        calendar.toggle_panel(panel.into(), at);
    }
    if let Some(index) = args.select_event {
        calendar.select_event(&events, index)?;
    }
    settle(&mut calendar);

    Ok(calendar.snapshot(&events))
}
