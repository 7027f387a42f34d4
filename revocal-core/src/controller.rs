//! Selected-date state and the commands the render layer calls.

use std::fmt;
use std::time::Instant;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::warn;

use crate::color::{CssColor, DisplayColor};
use crate::date_math;
use crate::error::{CalendarError, CalendarResult};
use crate::event::CalendarEvent;
use crate::event_index::events_on_day;
use crate::labels::LabelSet;
use crate::layout::LayoutDecision;
use crate::options::CalendarOptions;
use crate::panel::{AnimationTicket, PanelId, PanelStateMachine};
use crate::snapshot::CalendarSnapshot;
use crate::zone::Zone;

/// A selected day. `month` is zero-based.
///
/// After [`CalendarController::select_month`] the day may lie past the end
/// of the new month; such a selection is provisional until the caller
/// picks a day again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl CalendarDate {
    pub fn from_naive(date: NaiveDate) -> Self {
        CalendarDate {
            day: date.day(),
            month: date.month0(),
            year: date.year(),
        }
    }

    pub fn to_naive(&self) -> Option<NaiveDate> {
        date_math::to_naive(self.year, self.month, self.day)
    }

    /// Whether the day exists in the selected month.
    pub fn is_valid(&self) -> bool {
        self.to_naive().is_some()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month + 1, self.day)
    }
}

/// Callbacks into the embedding application. All default to no-ops.
pub trait CalendarHandler {
    fn date_selected(&mut self, _date: CalendarDate) {}
    fn event_selected(&mut self, _index: usize) {}
    fn add_event(&mut self, _date: CalendarDate) {}
    fn delete_event(&mut self, _index: usize) {}
}

impl CalendarHandler for () {}

/// A configuration problem the controller recovered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The initial date could not be parsed; today was used instead
    InvalidDate(String),
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::InvalidDate(value) => {
                write!(f, "invalid date '{value}', using the current date")
            }
        }
    }
}

pub struct CalendarController<H = ()> {
    options: CalendarOptions,
    labels: LabelSet,
    zone: Zone,
    date: CalendarDate,
    selected_event: Option<usize>,
    container_width: u32,
    panels: PanelStateMachine,
    handler: H,
    warnings: Vec<ConfigWarning>,
}

impl<H: CalendarHandler> CalendarController<H> {
    /// Build a controller for a container of `container_width` pixels.
    ///
    /// Fails on an unknown language or timezone. An unusable initial `date`
    /// falls back to today and is reported through [`Self::warnings`].
    pub fn new(options: CalendarOptions, handler: H, container_width: u32) -> CalendarResult<Self> {
        let labels = options.languages().labels(&options.lang)?.clone();
        let zone = options.zone()?;

        let mut warnings = Vec::new();
        let date = match options.date.as_deref() {
            None => CalendarDate::from_naive(zone.today()),
            Some(value) => match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
                Ok(date) => CalendarDate::from_naive(date),
                Err(_) => {
                    let warning = ConfigWarning::InvalidDate(value.to_string());
                    warn!("{warning}");
                    warnings.push(warning);
                    CalendarDate::from_naive(zone.today())
                }
            },
        };

        let layout = LayoutDecision::compute(container_width, options.sidebar_width, options.detail_width);
        let panels = PanelStateMachine::new(
            options.sidebar_default,
            options.detail_default,
            options.panel_policy(),
            layout,
        );

        Ok(CalendarController {
            options,
            labels,
            zone,
            date,
            selected_event: None,
            container_width,
            panels,
            handler,
            warnings,
        })
    }

    pub fn date(&self) -> CalendarDate {
        self.date
    }

    pub fn selected_event(&self) -> Option<usize> {
        self.selected_event
    }

    pub fn options(&self) -> &CalendarOptions {
        &self.options
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    pub fn panels(&self) -> &PanelStateMachine {
        &self.panels
    }

    pub fn layout(&self) -> &LayoutDecision {
        self.panels.layout()
    }

    pub fn container_width(&self) -> u32 {
        self.container_width
    }

    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Number of days in the currently selected month.
    pub fn days_in_month(&self) -> u32 {
        date_math::days_in_month(self.date.year, self.date.month)
    }

    /// Events on the selected day, in input order.
    pub fn day_events<'a>(&self, events: &'a [CalendarEvent]) -> Vec<&'a CalendarEvent> {
        events_on_day(events, &self.zone, self.date.year, self.date.month, self.date.day)
    }

    pub fn select_day(&mut self, day: u32, now: Instant) -> CalendarResult<Vec<AnimationTicket>> {
        let max = self.days_in_month();
        if day == 0 || day > max {
            return Err(CalendarError::DayOutOfRange { day, max });
        }

        self.date.day = day;
        self.selected_event = None;
        let started = self.panels.on_day_selected(now);
        self.handler.date_selected(self.date);

        Ok(started)
    }

    /// Switch month without touching the day, which may then be past the
    /// month's end (see [`CalendarDate`]).
    pub fn select_month(&mut self, month: u32) -> CalendarResult<()> {
        if month > 11 {
            return Err(CalendarError::InvalidMonth(month));
        }

        self.date.month = month;
        self.selected_event = None;
        self.handler.date_selected(self.date);

        Ok(())
    }

    pub fn select_year(&mut self, delta: i32) -> CalendarResult<()> {
        let year = self.date.year;
        self.date.year = year
            .checked_add(delta)
            .ok_or(CalendarError::YearOutOfRange { year, delta })?;
        self.selected_event = None;
        self.handler.date_selected(self.date);

        Ok(())
    }

    pub fn select_event(&mut self, events: &[CalendarEvent], index: usize) -> CalendarResult<()> {
        let count = self.day_events(events).len();
        if index >= count {
            return Err(CalendarError::EventOutOfRange { index, count });
        }

        self.selected_event = Some(index);
        self.handler.event_selected(index);

        Ok(())
    }

    pub fn add_event(&mut self) -> CalendarResult<()> {
        if !self.options.allow_add_event {
            return Err(CalendarError::ActionDisabled("add_event"));
        }

        self.handler.add_event(self.date);
        Ok(())
    }

    /// Delete the selected event, returning its index within the day.
    pub fn delete_event(&mut self) -> CalendarResult<usize> {
        if !self.options.allow_delete_event {
            return Err(CalendarError::ActionDisabled("delete_event"));
        }
        let index = self.selected_event.take().ok_or(CalendarError::NoEventSelected)?;

        self.handler.delete_event(index);
        Ok(index)
    }

    pub fn toggle_panel(&mut self, panel: PanelId, now: Instant) -> Vec<AnimationTicket> {
        self.panels.toggle(panel, now)
    }

    pub fn background_click(&mut self, now: Instant) -> Vec<AnimationTicket> {
        self.panels.on_floating_background_click(now)
    }

    pub fn complete_animation(&mut self, ticket: AnimationTicket) -> bool {
        self.panels.complete_animation(ticket)
    }

    pub fn advance(&mut self, now: Instant) -> Vec<PanelId> {
        self.panels.advance(now)
    }

    /// The container was resized.
    pub fn resize(&mut self, container_width: u32, now: Instant) -> Vec<AnimationTicket> {
        self.container_width = container_width;
        let layout = self.compute_layout();
        self.panels.on_layout_changed(layout, now)
    }

    /// Apply changed options to a live widget.
    ///
    /// The selected date, selection and panel defaults are kept; policy,
    /// widths, labels and zone follow the new options.
    pub fn update_options(&mut self, options: CalendarOptions, now: Instant) -> CalendarResult<Vec<AnimationTicket>> {
        let labels = options.languages().labels(&options.lang)?.clone();
        let zone = options.zone()?;
        let policy = options.panel_policy();

        self.options = options;
        self.labels = labels;
        self.zone = zone;

        let mut started = self.panels.set_policy(policy, now);
        let layout = self.compute_layout();
        started.extend(self.panels.on_layout_changed(layout, now));

        Ok(started)
    }

    /// Plain data for painting, using today's date in the widget's zone.
    pub fn snapshot(&self, events: &[CalendarEvent]) -> CalendarSnapshot {
        self.snapshot_with(events, self.zone.today(), &CssColor)
    }

    pub fn snapshot_with(
        &self,
        events: &[CalendarEvent],
        today: NaiveDate,
        colors: &dyn DisplayColor,
    ) -> CalendarSnapshot {
        CalendarSnapshot::build(self, events, today, colors)
    }

    fn compute_layout(&self) -> LayoutDecision {
        LayoutDecision::compute(
            self.container_width,
            self.options.sidebar_width,
            self.options.detail_width,
        )
    }
}
