//! Layout controller: drives one panel from `Unmeasured` to `Packed`.
//!
//! # State Machine
//!
//! - Starts `Unmeasured` with an empty registry.
//! - Item handles are registered as the flat, hidden rendering mounts.
//! - [`LayoutController::settle`] packs once every expected item has a height
//!   and the budget is positive.
//! - Any change to item count, item content, an item's height, or the budget
//!   drops back to `Unmeasured` and clears the registry.
//!
//! Invalidation is input-driven. An item that never reports a height keeps
//! the controller `Unmeasured` until the next input change restarts the cycle.

use super::measurement::Budget;
use super::packer::pack;
use super::registry::{HeightsSnapshot, ItemHandle, ItemRegistry, RegistryError};
use super::types::{format_columns, ItemIndex, LayoutState};
use tracing::{debug, warn};

/// Inputs that define one settled layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutInputs {
    /// Number of items in the source list.
    pub item_count: usize,
    /// Fingerprint of item content; changes whenever any item's rendering may.
    pub content_key: u64,
    /// Current budget, `None` until the container has been measured.
    pub budget: Option<Budget>,
}

/// Why a packed (or partially measured) layout was discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invalidation {
    /// Item count changed.
    ItemCount {
        /// Previous count.
        from: usize,
        /// New count.
        to: usize,
    },
    /// Some item's content changed.
    Content,
    /// The derived budget changed.
    Budget,
    /// A re-registered item reported a different height.
    ItemHeight(ItemIndex),
}

/// Owns the layout state and item registry of one open panel.
#[derive(Debug, Clone, Default)]
pub struct LayoutController {
    inputs: Option<LayoutInputs>,
    registry: ItemRegistry,
    state: LayoutState,
    withheld: bool,
}

impl LayoutController {
    /// Fresh controller in the `Unmeasured` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current layout state.
    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    /// Inputs of the current cycle, if any were synced.
    pub fn inputs(&self) -> Option<LayoutInputs> {
        self.inputs
    }

    /// Read access to the registry.
    pub fn registry(&self) -> &ItemRegistry {
        &self.registry
    }

    /// Whether items must be rendered flat and measured this frame.
    pub fn needs_measurement(&self) -> bool {
        !self.state.is_packed()
    }

    /// Feed the latest inputs. Returns the invalidation if they changed.
    ///
    /// The first sync never reports an invalidation; it only sizes the
    /// registry.
    pub fn sync(&mut self, next: LayoutInputs) -> Option<Invalidation> {
        let Some(previous) = self.inputs else {
            self.inputs = Some(next);
            self.registry.reset(next.item_count);
            return None;
        };

        let reason = if previous.item_count != next.item_count {
            Invalidation::ItemCount {
                from: previous.item_count,
                to: next.item_count,
            }
        } else if previous.content_key != next.content_key {
            Invalidation::Content
        } else if previous.budget != next.budget {
            Invalidation::Budget
        } else {
            return None;
        };

        self.inputs = Some(next);
        self.invalidate(reason);
        Some(reason)
    }

    /// Record an item's handle.
    ///
    /// While packed, a handle reporting a different height than the one the
    /// columns were built from invalidates the layout before being recorded.
    pub fn register(&mut self, index: ItemIndex, handle: ItemHandle) -> Result<(), RegistryError> {
        if self.state.is_packed() {
            let known = self.registry.height(index);
            if known.is_some() && known != handle.height() {
                self.invalidate(Invalidation::ItemHeight(index));
            }
        }

        self.registry.register(index, handle).map(|_| ())
    }

    /// Pack if every expected height is known and the budget is positive.
    ///
    /// Never packs against a partial registry.
    pub fn settle(&mut self) -> &LayoutState {
        if self.state.is_packed() {
            return &self.state;
        }

        let Some(inputs) = self.inputs else {
            return &self.state;
        };

        let Some(column_budget) = inputs.budget.and_then(|b| b.column_budget()) else {
            if !self.withheld {
                warn!(
                    budget = ?inputs.budget,
                    "Packing withheld: no positive height budget"
                );
                self.withheld = true;
            }
            return &self.state;
        };
        self.withheld = false;

        match self.registry.heights_snapshot() {
            HeightsSnapshot::Incomplete { missing } => {
                debug!(missing, "Waiting for item measurements");
            }
            HeightsSnapshot::Complete(heights) => {
                let columns = pack(&heights, column_budget);
                debug!(
                    items = heights.len(),
                    columns = columns.len(),
                    max_height = column_budget.get(),
                    layout = %format_columns(&columns),
                    "Packed items into columns"
                );
                self.state = LayoutState::Packed(columns);
            }
        }

        &self.state
    }

    fn invalidate(&mut self, reason: Invalidation) {
        debug!(?reason, "Layout invalidated");
        self.state = LayoutState::Unmeasured;
        let expected = self.inputs.map_or(0, |inputs| inputs.item_count);
        self.registry.reset(expected);
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
