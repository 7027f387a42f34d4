//! Terminal rendering for widget snapshots.
//!
//! This module provides extension traits that turn revocal-core snapshots
//! into colored terminal output using owo_colors.

use owo_colors::OwoColorize;
use revocal_core::snapshot::{CalendarSnapshot, DayCell, DetailView, GridView, SidebarView};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Characters per grid cell, including the event marker.
const CELL_WIDTH: usize = 4;

impl Render for DayCell {
    fn render(&self) -> String {
        let number = format!("{:>2}", self.day);
        let number = if self.selected {
            number.reversed().to_string()
        } else if self.today {
            number.underline().to_string()
        } else {
            number
        };
        let marker = if self.has_event { "•".yellow().to_string() } else { " ".to_string() };

        format!("{number}{marker} ")
    }
}

impl Render for GridView {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        let header: Vec<String> = self
            .weekdays
            .iter()
            .map(|d| format!("{:<width$}", d, width = CELL_WIDTH))
            .collect();
        lines.push(header.concat().bold().to_string());

        let mut row = " ".repeat(self.offset as usize * CELL_WIDTH);
        let mut column = self.offset as usize;
        for cell in &self.days {
            row.push_str(&cell.render());
            column += 1;
            if column == 7 {
                lines.push(std::mem::take(&mut row));
                column = 0;
            }
        }
        if !row.is_empty() {
            lines.push(row);
        }

        lines.join("\n")
    }
}

impl Render for SidebarView {
    fn render(&self) -> String {
        let mut lines = vec![format!("‹ {} ›", self.year.bold())];
        for month in &self.months {
            if month.current {
                lines.push(format!("  {}", month.label.reversed()));
            } else {
                lines.push(format!("  {}", month.label));
            }
        }
        lines.join("\n")
    }
}

impl Render for DetailView {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        let title = self.title.clone().unwrap_or_else(|| "-".to_string());
        match &self.add_event_label {
            Some(add) => lines.push(format!("{}  [{}]", title.bold(), add)),
            None => lines.push(title.bold().to_string()),
        }

        if self.events.is_empty() {
            lines.push(format!("  {}", self.empty_label.dimmed()));
        }
        for row in &self.events {
            let name = if row.selected {
                row.name.reversed().to_string()
            } else {
                row.name.clone()
            };
            let mut line = format!("  {} {}", row.time_label.dimmed(), name);
            if let Some(extra) = &row.extra {
                line.push_str(&format!(" ({})", extra.text));
            }
            if let Some(delete) = &row.delete_label {
                line.push_str(&format!("  [{}]", delete.red()));
            }
            lines.push(line);
        }

        lines.join("\n")
    }
}

impl Render for CalendarSnapshot {
    fn render(&self) -> String {
        let mut sections = Vec::new();

        let month = self
            .sidebar
            .months
            .iter()
            .find(|m| m.current)
            .map(|m| m.label.as_str())
            .unwrap_or_default();
        sections.push(format!("{} {}", month.bold(), self.date.year));

        if self.sidebar.panel.open {
            sections.push(self.sidebar.render());
        }
        sections.push(self.grid.render());
        if self.detail.panel.open {
            sections.push(self.detail.render());
        }

        let mut mode = Vec::new();
        if self.layout.floating {
            mode.push("floating");
        }
        if self.layout.forced_single_panel {
            mode.push("single-panel");
        }
        if !mode.is_empty() {
            sections.push(format!("({})", mode.join(", ")).dimmed().to_string());
        }

        sections.join("\n\n")
    }
}
