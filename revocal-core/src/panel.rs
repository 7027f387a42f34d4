//! Open/closed/animating state for the sidebar and detail panels.
//!
//! Each `PanelStateMachine` owns the state of exactly one widget instance.
//! Animation hints clear through [`AnimationTicket`]s: every new animation
//! on a panel bumps that panel's generation, so a ticket issued for an
//! earlier animation can no longer clear the newer one.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layout::LayoutDecision;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelId {
    Sidebar,
    Detail,
}

impl PanelId {
    pub fn other(self) -> PanelId {
        match self {
            PanelId::Sidebar => PanelId::Detail,
            PanelId::Detail => PanelId::Sidebar,
        }
    }
}

/// Transition hint for the render layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Animation {
    #[default]
    Idle,
    AnimatingIn,
    AnimatingOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PanelState {
    pub open: bool,
    pub animation: Animation,
}

impl PanelState {
    pub fn is_animating(&self) -> bool {
        self.animation != Animation::Idle
    }
}

/// Handle for clearing one scheduled animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTicket {
    pub panel: PanelId,
    pub generation: u64,
    /// When the animation hint clears on its own
    pub deadline: Instant,
}

/// Behavior switches that come from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelPolicy {
    /// Allow only one open panel even when both would fit
    pub one_panel_at_a_time: bool,
    pub open_details_on_date_selection: bool,
    pub animation_speed: Duration,
}

impl Default for PanelPolicy {
    fn default() -> Self {
        PanelPolicy {
            one_panel_at_a_time: false,
            open_details_on_date_selection: true,
            animation_speed: Duration::from_millis(300),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    state: PanelState,
    generation: u64,
    deadline: Option<Instant>,
}

impl Slot {
    fn settled(open: bool) -> Self {
        Slot {
            state: PanelState {
                open,
                animation: Animation::Idle,
            },
            generation: 0,
            deadline: None,
        }
    }

    /// Move to `open` and start the matching animation, superseding any
    /// pending one.
    fn begin(&mut self, open: bool, panel: PanelId, deadline: Instant) -> AnimationTicket {
        self.state.open = open;
        self.state.animation = if open {
            Animation::AnimatingIn
        } else {
            Animation::AnimatingOut
        };
        self.generation += 1;
        self.deadline = Some(deadline);

        AnimationTicket {
            panel,
            generation: self.generation,
            deadline,
        }
    }

    fn settle(&mut self) {
        self.state.animation = Animation::Idle;
        self.deadline = None;
    }

    fn ticket(&self, panel: PanelId) -> Option<AnimationTicket> {
        self.deadline.map(|deadline| AnimationTicket {
            panel,
            generation: self.generation,
            deadline,
        })
    }
}

#[derive(Debug, Clone)]
pub struct PanelStateMachine {
    sidebar: Slot,
    detail: Slot,
    policy: PanelPolicy,
    layout: LayoutDecision,
}

impl PanelStateMachine {
    /// Create the machine with the configured default-open flags,
    /// reconciled against the initial layout before anything is painted.
    ///
    /// When only one panel may be open and both default to open, the
    /// sidebar wins and the detail panel starts closed without animating.
    pub fn new(
        sidebar_default: bool,
        detail_default: bool,
        policy: PanelPolicy,
        layout: LayoutDecision,
    ) -> Self {
        let mut machine = PanelStateMachine {
            sidebar: Slot::settled(sidebar_default),
            detail: Slot::settled(detail_default),
            policy,
            layout,
        };

        if machine.single_panel() && sidebar_default && detail_default {
            debug!("both panels default open in single-panel mode, starting with sidebar only");
            machine.detail = Slot::settled(false);
        }

        machine
    }

    pub fn state(&self, panel: PanelId) -> PanelState {
        self.slot(panel).state
    }

    pub fn is_open(&self, panel: PanelId) -> bool {
        self.slot(panel).state.open
    }

    pub fn layout(&self) -> &LayoutDecision {
        &self.layout
    }

    pub fn policy(&self) -> &PanelPolicy {
        &self.policy
    }

    /// Whether at most one panel may be open right now.
    pub fn single_panel(&self) -> bool {
        self.policy.one_panel_at_a_time || self.layout.forced_single_panel
    }

    /// Flip a panel open or closed.
    ///
    /// Ignored while that panel is still animating. Opening a panel in
    /// single-panel mode closes the other one in the same transition.
    /// Returns the tickets of every animation started, empty on a no-op.
    pub fn toggle(&mut self, panel: PanelId, now: Instant) -> Vec<AnimationTicket> {
        if self.slot(panel).state.is_animating() {
            debug!(?panel, "toggle ignored while panel is animating");
            return Vec::new();
        }

        let opening = !self.slot(panel).state.open;
        let deadline = self.deadline_from(now);
        let mut started = Vec::with_capacity(2);

        if opening && self.single_panel() {
            started.extend(self.force_close(panel.other(), now));
        }
        started.push(self.slot_mut(panel).begin(opening, panel, deadline));

        started
    }

    /// React to the user picking a day.
    pub fn on_day_selected(&mut self, now: Instant) -> Vec<AnimationTicket> {
        if self.policy.open_details_on_date_selection && !self.detail.state.open {
            self.toggle(PanelId::Detail, now)
        } else {
            Vec::new()
        }
    }

    /// Adopt a new layout, closing the detail panel if both panels are open
    /// but no longer fit together.
    pub fn on_layout_changed(&mut self, layout: LayoutDecision, now: Instant) -> Vec<AnimationTicket> {
        self.layout = layout;
        self.reconcile(now)
    }

    /// Adopt a new policy, applying the same reconciliation as a layout change.
    pub fn set_policy(&mut self, policy: PanelPolicy, now: Instant) -> Vec<AnimationTicket> {
        self.policy = policy;
        self.reconcile(now)
    }

    /// A click on the backdrop behind a floating panel closes that panel,
    /// the sidebar first. Does nothing when panels are not floating.
    pub fn on_floating_background_click(&mut self, now: Instant) -> Vec<AnimationTicket> {
        if !self.layout.floating {
            return Vec::new();
        }

        if self.sidebar.state.open {
            self.toggle(PanelId::Sidebar, now)
        } else if self.detail.state.open {
            self.toggle(PanelId::Detail, now)
        } else {
            Vec::new()
        }
    }

    /// The render layer finished playing an animation.
    ///
    /// Returns `false` when the ticket is stale or already resolved.
    pub fn complete_animation(&mut self, ticket: AnimationTicket) -> bool {
        let slot = self.slot_mut(ticket.panel);
        if slot.generation != ticket.generation || slot.deadline.is_none() {
            debug!(panel = ?ticket.panel, generation = ticket.generation, "stale animation ticket");
            return false;
        }
        slot.settle();
        true
    }

    /// Clear every animation whose deadline has passed, returning the
    /// panels that settled.
    pub fn advance(&mut self, now: Instant) -> Vec<PanelId> {
        let mut settled = Vec::new();
        for panel in [PanelId::Sidebar, PanelId::Detail] {
            let slot = self.slot_mut(panel);
            if slot.deadline.is_some_and(|deadline| deadline <= now) {
                slot.settle();
                settled.push(panel);
            }
        }
        settled
    }

    /// Animations still waiting to clear.
    pub fn pending(&self) -> Vec<AnimationTicket> {
        [PanelId::Sidebar, PanelId::Detail]
            .into_iter()
            .filter_map(|panel| self.slot(panel).ticket(panel))
            .collect()
    }

    /// Earliest pending deadline, for scheduling the next `advance`.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending().iter().map(|t| t.deadline).min()
    }

    fn reconcile(&mut self, now: Instant) -> Vec<AnimationTicket> {
        if self.single_panel() && self.sidebar.state.open && self.detail.state.open {
            debug!("both panels open in single-panel mode, closing detail");
            self.force_close(PanelId::Detail, now).into_iter().collect()
        } else {
            Vec::new()
        }
    }

    /// Close a panel regardless of any animation in flight.
    fn force_close(&mut self, panel: PanelId, now: Instant) -> Option<AnimationTicket> {
        let deadline = self.deadline_from(now);
        let slot = self.slot_mut(panel);
        slot.state.open.then(|| slot.begin(false, panel, deadline))
    }

    fn deadline_from(&self, now: Instant) -> Instant {
        now + self.policy.animation_speed
    }

    fn slot(&self, panel: PanelId) -> &Slot {
        match panel {
            PanelId::Sidebar => &self.sidebar,
            PanelId::Detail => &self.detail,
        }
    }

    fn slot_mut(&mut self, panel: PanelId) -> &mut Slot {
        match panel {
            PanelId::Sidebar => &mut self.sidebar,
            PanelId::Detail => &mut self.detail,
        }
    }
}
