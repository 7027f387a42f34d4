//! Responsive layout decisions for the two side panels.

use serde::Serialize;

/// Minimum width the month grid needs next to any panel.
pub const BASE_CONTENT_MIN_WIDTH: u32 = 320;

/// Horizontal room a panel leaves free when it has to narrow.
const PANEL_MARGIN: u32 = 50;

/// Layout derived from the container width and the configured panel widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutDecision {
    /// Panels overlay the grid instead of sitting beside it
    pub floating: bool,
    /// Only one panel fits at a time
    pub forced_single_panel: bool,
    pub sidebar_effective_width: u32,
    pub detail_effective_width: u32,
}

impl LayoutDecision {
    pub fn compute(container_width: u32, sidebar_width: u32, detail_width: u32) -> Self {
        Self::compute_with_min(container_width, sidebar_width, detail_width, BASE_CONTENT_MIN_WIDTH)
    }

    pub fn compute_with_min(
        container_width: u32,
        sidebar_width: u32,
        detail_width: u32,
        base_content_min_width: u32,
    ) -> Self {
        let fits_beside = |panel: u32| container_width > base_content_min_width.saturating_add(panel);

        LayoutDecision {
            forced_single_panel: !fits_beside(sidebar_width.saturating_add(detail_width)),
            floating: !fits_beside(sidebar_width) || !fits_beside(detail_width),
            sidebar_effective_width: effective_width(container_width, sidebar_width),
            detail_effective_width: effective_width(container_width, detail_width),
        }
    }
}

fn effective_width(container_width: u32, configured: u32) -> u32 {
    if container_width < configured.saturating_add(PANEL_MARGIN) {
        container_width.saturating_sub(PANEL_MARGIN)
    } else {
        configured
    }
}
