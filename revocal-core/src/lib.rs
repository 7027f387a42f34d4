//! Core logic for the revocal calendar widget.
//!
//! This crate holds everything a render layer needs and nothing it paints:
//! - `date_math` and `event_index` for the month grid
//! - `layout` and `panel` for the responsive sidebar/detail panels
//! - `controller` for the selected date and user commands
//! - `snapshot` for the plain data a render layer draws from

pub mod color;
pub mod config;
pub mod controller;
pub mod date_math;
pub mod error;
pub mod event;
pub mod event_index;
pub mod format;
pub mod labels;
pub mod layout;
pub mod options;
pub mod panel;
pub mod snapshot;
pub mod zone;

pub use controller::{CalendarController, CalendarDate, CalendarHandler, ConfigWarning};
pub use error::{CalendarError, CalendarResult};
pub use event::{CalendarEvent, EventExtra};
pub use layout::LayoutDecision;
pub use options::CalendarOptions;
pub use panel::{Animation, AnimationTicket, PanelId, PanelPolicy, PanelState, PanelStateMachine};
pub use snapshot::CalendarSnapshot;
pub use zone::Zone;
