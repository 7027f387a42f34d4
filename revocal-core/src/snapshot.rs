//! Render-ready view of a controller.
//!
//! A snapshot is plain data: the render layer paints it and sends commands
//! back to the controller, it never reaches into controller state.

use chrono::NaiveDate;
use serde::Serialize;

use crate::color::DisplayColor;
use crate::controller::{CalendarController, CalendarDate, CalendarHandler};
use crate::date_math;
use crate::event::CalendarEvent;
use crate::event_index::MonthIndex;
use crate::format::{format_date, format_time};
use crate::layout::LayoutDecision;
use crate::panel::{Animation, PanelId};

#[derive(Debug, Clone, Serialize)]
pub struct CalendarSnapshot {
    pub date: CalendarDate,
    pub layout: LayoutDecision,
    pub theme: Theme,
    pub sidebar: SidebarView,
    pub grid: GridView,
    pub detail: DetailView,
}

#[derive(Debug, Clone, Serialize)]
pub struct Theme {
    pub primary_color: String,
    pub secondary_color: String,
    pub today_color: String,
    pub text_color: String,
    pub indicator_color: String,
    pub animation_speed_ms: u64,
}

/// Open state and chrome shared by both panels
#[derive(Debug, Clone, Serialize)]
pub struct PanelView {
    pub open: bool,
    pub animation: Animation,
    /// Width after narrowing for small containers
    pub width: u32,
    pub floating: bool,
    pub show_toggler: bool,
    pub toggle_label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SidebarView {
    pub panel: PanelView,
    pub year: i32,
    pub previous_year_label: String,
    pub next_year_label: String,
    pub months: Vec<MonthEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthEntry {
    pub index: u32,
    pub label: String,
    pub current: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridView {
    /// Weekday headers, starting at the configured first day of the week
    pub weekdays: Vec<String>,
    /// Empty cells before day 1
    pub offset: u32,
    pub days: Vec<DayCell>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayCell {
    pub day: u32,
    pub selected: bool,
    /// Only set when `highlight_today` is enabled
    pub today: bool,
    pub has_event: bool,
    pub indicators: Vec<Indicator>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Indicator {
    pub icon: Option<String>,
    /// `None` inherits the cell's text color
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DetailView {
    pub panel: PanelView,
    /// Formatted selected date; `None` while the selection is past month end
    pub title: Option<String>,
    pub add_event_label: Option<String>,
    pub events: Vec<EventRow>,
    /// Shown when `events` is empty
    pub empty_label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventRow {
    pub index: usize,
    pub name: String,
    pub time_label: String,
    pub extra: Option<ExtraView>,
    pub selected: bool,
    pub delete_label: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtraView {
    pub icon: Option<String>,
    pub text: String,
    pub color: String,
}

impl CalendarSnapshot {
    pub fn build<H: CalendarHandler>(
        calendar: &CalendarController<H>,
        events: &[CalendarEvent],
        today: NaiveDate,
        colors: &dyn DisplayColor,
    ) -> Self {
        let options = calendar.options();
        let labels = calendar.labels();
        let date = calendar.date();
        let layout = *calendar.layout();

        let theme = Theme {
            primary_color: colors.to_display_color(&options.primary_color),
            secondary_color: colors.to_display_color(&options.secondary_color),
            today_color: colors.to_display_color(&options.today_color),
            text_color: colors.to_display_color(&options.text_color),
            indicator_color: colors.to_display_color(&options.indicator_color),
            animation_speed_ms: options.animation_speed,
        };

        let panel_view = |panel: PanelId, width: u32, show_toggler: bool, toggle_label: &str| {
            let state = calendar.panels().state(panel);
            PanelView {
                open: state.open,
                animation: state.animation,
                width,
                floating: layout.floating,
                show_toggler,
                toggle_label: toggle_label.to_string(),
            }
        };

        let sidebar = SidebarView {
            panel: panel_view(
                PanelId::Sidebar,
                layout.sidebar_effective_width,
                options.show_sidebar_toggler,
                &labels.toggle_sidebar,
            ),
            year: date.year,
            previous_year_label: labels.previous_year.clone(),
            next_year_label: labels.next_year.clone(),
            months: labels
                .months
                .iter()
                .zip(0u32..)
                .map(|(label, index)| MonthEntry {
                    index,
                    label: label.clone(),
                    current: index == date.month,
                })
                .collect(),
        };

        let index = MonthIndex::build(events, calendar.zone(), date.year, date.month);
        let per_day = options.indicators_per_day();
        let start = options.week_start.num_days_from_sunday() as usize;
        let grid = GridView {
            weekdays: (0..7)
                .map(|i| labels.days_min[(start + i) % 7].clone())
                .collect(),
            offset: date_math::first_weekday_offset(date.year, date.month, options.week_start),
            days: (1..=date_math::days_in_month(date.year, date.month))
                .map(|day| DayCell {
                    day,
                    selected: day == date.day,
                    today: options.highlight_today
                        && date_math::is_today_at(day, date.month, date.year, today),
                    has_event: index.has_event(day),
                    indicators: index
                        .events_for(events, day)
                        .into_iter()
                        .take(per_day)
                        .map(|event| Indicator {
                            icon: event.extra.as_ref().and_then(|x| x.icon.clone()),
                            color: event
                                .extra
                                .as_ref()
                                .and_then(|x| x.color.as_deref())
                                .map(|c| colors.to_display_color(c)),
                        })
                        .collect(),
                })
                .collect(),
        };

        let detail_events = if date.is_valid() {
            index.events_for(events, date.day)
        } else {
            Vec::new()
        };
        let rows = detail_events
            .into_iter()
            .enumerate()
            .map(|(i, event)| {
                let selected = calendar.selected_event() == Some(i);
                EventRow {
                    index: i,
                    name: event.name.clone(),
                    time_label: time_label(calendar, event),
                    extra: event.extra.as_ref().map(|x| ExtraView {
                        icon: x.icon.clone(),
                        text: x.text.clone(),
                        color: x
                            .color
                            .as_deref()
                            .map(|c| colors.to_display_color(c))
                            .unwrap_or_else(|| theme.indicator_color.clone()),
                    }),
                    selected,
                    delete_label: (options.allow_delete_event && selected)
                        .then(|| labels.delete.clone()),
                }
            })
            .collect();

        let detail = DetailView {
            panel: panel_view(
                PanelId::Detail,
                layout.detail_effective_width,
                options.show_detail_toggler,
                &labels.toggle_details,
            ),
            title: date
                .to_naive()
                .map(|d| format_date(d, &options.detail_date_format, labels)),
            add_event_label: options.allow_add_event.then(|| labels.add_event.clone()),
            events: rows,
            empty_label: labels.no_event_for_this_day.clone(),
        };

        CalendarSnapshot {
            date,
            layout,
            theme,
            sidebar,
            grid,
            detail,
        }
    }
}

fn time_label<H: CalendarHandler>(calendar: &CalendarController<H>, event: &CalendarEvent) -> String {
    let options = calendar.options();
    if event.all_day && options.show_all_day_label {
        return calendar.labels().all_day.clone();
    }

    event
        .start()
        .map(|start| format_time(calendar.zone().local_of(&start).time(), options.time_format_24))
        .unwrap_or_default()
}
