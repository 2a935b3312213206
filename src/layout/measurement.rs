//! Measurement provider: container offset and viewport size, and the budget
//! derived from them.

use super::types::ColumnBudget;
use ratatui::layout::{Rect, Size};

/// Default share of the space below the container given to one column.
pub const DEFAULT_HEIGHT_PERCENT: u8 = 80;

/// Default horizontal margin subtracted from the viewport width.
pub const DEFAULT_WIDTH_MARGIN: u16 = 4;

/// The observed triple: container top offset plus viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Row where the container starts.
    pub container_top: u16,
    /// Viewport width in columns.
    pub viewport_width: u16,
    /// Viewport height in rows.
    pub viewport_height: u16,
}

impl Geometry {
    /// Build the triple from a container rect and the viewport size.
    pub fn observe(container: Rect, viewport: Size) -> Self {
        Self {
            container_top: container.y,
            viewport_width: viewport.width,
            viewport_height: viewport.height,
        }
    }
}

/// How a [`Budget`] is derived from a [`Geometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetPolicy {
    /// Percentage (1..=100) of the rows below the container usable per column.
    pub height_percent: u8,
    /// Columns kept free at the viewport edge.
    pub width_margin: u16,
}

impl Default for BudgetPolicy {
    fn default() -> Self {
        Self {
            height_percent: DEFAULT_HEIGHT_PERCENT,
            width_margin: DEFAULT_WIDTH_MARGIN,
        }
    }
}

/// Height and width limits for the popover panel.
///
/// Read-only input to the packer; a change in value invalidates any packed
/// layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Budget {
    /// Maximum column height in rows.
    pub max_height: u16,
    /// Maximum panel width in columns.
    pub max_width: u16,
}

impl Budget {
    /// `max_height = percent% of (viewport_height - container_top)`,
    /// `max_width = viewport_width - width_margin`, both saturating at zero.
    pub fn derive(geometry: Geometry, policy: BudgetPolicy) -> Self {
        let below = u32::from(
            geometry
                .viewport_height
                .saturating_sub(geometry.container_top),
        );
        let percent = u32::from(policy.height_percent.min(100));
        let max_height = u16::try_from(below * percent / 100).unwrap_or(u16::MAX);

        Self {
            max_height,
            max_width: geometry.viewport_width.saturating_sub(policy.width_margin),
        }
    }

    /// The height budget as a packer input, `None` when non-positive.
    pub fn column_budget(&self) -> Option<ColumnBudget> {
        ColumnBudget::new(self.max_height)
    }
}

/// Tracks the latest geometry for one panel.
///
/// Pure observation: it never touches layout state. Callers compare budgets
/// to decide on invalidation.
#[derive(Debug, Clone, Default)]
pub struct MeasurementProvider {
    policy: BudgetPolicy,
    geometry: Option<Geometry>,
}

impl MeasurementProvider {
    /// Create a provider with no observation yet.
    pub fn new(policy: BudgetPolicy) -> Self {
        Self {
            policy,
            geometry: None,
        }
    }

    /// Record the current container and viewport.
    ///
    /// Returns `true` when the observed triple changed.
    pub fn observe(&mut self, container: Rect, viewport: Size) -> bool {
        let next = Geometry::observe(container, viewport);
        let changed = self.geometry != Some(next);
        self.geometry = Some(next);
        changed
    }

    /// Latest observed triple.
    pub fn geometry(&self) -> Option<Geometry> {
        self.geometry
    }

    /// Budget for the latest observation, `None` before the first one.
    pub fn budget(&self) -> Option<Budget> {
        self.geometry
            .map(|geometry| Budget::derive(geometry, self.policy))
    }

    /// Policy used to derive budgets.
    pub fn policy(&self) -> BudgetPolicy {
        self.policy
    }
}
