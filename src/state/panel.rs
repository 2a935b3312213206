//! The open popover panel.
//!
//! A `PopoverPanel` exists only while the popover is open. It exclusively
//! owns the layout controller (and through it the item registry) and the
//! measurement provider; closing the popover drops all of them.

use crate::layout::{BudgetPolicy, ItemIndex, LayoutController, MeasurementProvider};
use crate::model::ContextError;
use ratatui::layout::{Position, Rect};

/// Name used in [`ContextError::MissingProvider`] for this provider.
pub const PANEL_PROVIDER: &str = "popover panel";

/// Per-open-panel layout state.
#[derive(Debug, Clone)]
pub struct PopoverPanel {
    controller: LayoutController,
    measurement: MeasurementProvider,
    area: Option<Rect>,
    hit_areas: Vec<(ItemIndex, Rect)>,
}

impl PopoverPanel {
    /// Fresh panel: unmeasured, nothing observed yet.
    pub fn new(policy: BudgetPolicy) -> Self {
        Self {
            controller: LayoutController::new(),
            measurement: MeasurementProvider::new(policy),
            area: None,
            hit_areas: Vec::new(),
        }
    }

    /// Layout controller of this panel.
    pub fn controller(&self) -> &LayoutController {
        &self.controller
    }

    /// Mutable layout controller.
    pub fn controller_mut(&mut self) -> &mut LayoutController {
        &mut self.controller
    }

    /// Measurement provider of this panel.
    pub fn measurement(&self) -> &MeasurementProvider {
        &self.measurement
    }

    /// Mutable measurement provider.
    pub fn measurement_mut(&mut self) -> &mut MeasurementProvider {
        &mut self.measurement
    }

    /// Record where the panel and its item headers were last drawn.
    ///
    /// `None` means the panel was not drawn (still unmeasured).
    pub fn set_rendered(&mut self, area: Option<Rect>, hit_areas: Vec<(ItemIndex, Rect)>) {
        self.area = area;
        self.hit_areas = hit_areas;
    }

    /// Last drawn panel rectangle.
    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    /// Whether a screen cell lies inside the last drawn panel.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }

    /// Item whose header row was drawn at the given cell.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<ItemIndex> {
        let position = Position::new(column, row);
        self.hit_areas
            .iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(index, _)| *index)
    }
}

/// Resolve the panel for a consumer, failing fast when none is open.
///
/// # Errors
///
/// `ContextError::MissingProvider` naming `consumer` when `panel` is `None`.
pub fn require_panel<'a>(
    panel: Option<&'a PopoverPanel>,
    consumer: &'static str,
) -> Result<&'a PopoverPanel, ContextError> {
    panel.ok_or(ContextError::MissingProvider {
        consumer,
        provider: PANEL_PROVIDER,
    })
}

/// Mutable variant of [`require_panel`].
///
/// # Errors
///
/// `ContextError::MissingProvider` naming `consumer` when `panel` is `None`.
pub fn require_panel_mut<'a>(
    panel: Option<&'a mut PopoverPanel>,
    consumer: &'static str,
) -> Result<&'a mut PopoverPanel, ContextError> {
    panel.ok_or(ContextError::MissingProvider {
        consumer,
        provider: PANEL_PROVIDER,
    })
}
