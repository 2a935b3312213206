//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. Transitions are
//! plain methods testable without a terminal.

use super::panel::{require_panel, require_panel_mut, PopoverPanel};
use crate::config::MAX_ITEMS;
use crate::layout::{BudgetPolicy, ItemIndex};
use crate::model::{Align, Catalogue, ContextError, KeyAction, MenuItem};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use tracing::{debug, info, warn};

/// Application state. Pure data, no side effects.
///
/// # State Machine
///
/// - **Panel**: Closed ⇄ Open. Opening creates a fresh [`PopoverPanel`]
///   (unmeasured); closing drops it with its layout state and registry.
/// - **Items**: count and content change freely; the open panel notices the
///   change through [`AppState::content_key`] and the item count on its next
///   render.
#[derive(Debug, Clone)]
pub struct AppState {
    catalogue: Catalogue,
    items: Vec<MenuItem>,
    content_key: u64,

    /// Horizontal alignment of the bar content.
    pub align: Align,

    policy: BudgetPolicy,
    column_width: u16,
    panel: Option<PopoverPanel>,
}

impl AppState {
    /// Create state with `items_count` items taken from `catalogue`.
    pub fn new(
        catalogue: Catalogue,
        items_count: usize,
        align: Align,
        policy: BudgetPolicy,
        column_width: u16,
    ) -> Self {
        let mut state = Self {
            catalogue,
            items: Vec::new(),
            content_key: 0,
            align,
            policy,
            column_width,
            panel: None,
        };
        state.set_items_count(items_count);
        state
    }

    /// Current menu items in source order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Number of menu items.
    pub fn items_count(&self) -> usize {
        self.items.len()
    }

    /// Fingerprint of the current item content.
    pub fn content_key(&self) -> u64 {
        self.content_key
    }

    /// Width of one packed column.
    pub fn column_width(&self) -> u16 {
        self.column_width
    }

    /// Budget derivation settings handed to each new panel.
    pub fn budget_policy(&self) -> BudgetPolicy {
        self.policy
    }

    /// Resize the item list, keeping existing items (and their expansion).
    ///
    /// Clamped to `MAX_ITEMS` and to the catalogue size. Returns the count
    /// actually applied.
    pub fn set_items_count(&mut self, requested: usize) -> usize {
        let mut count = requested.min(MAX_ITEMS);
        if let Some(capacity) = self.catalogue.capacity() {
            if count > capacity {
                warn!(
                    requested,
                    available = capacity,
                    "Menu catalogue has fewer items than requested"
                );
                count = capacity;
            }
        }

        if count < self.items.len() {
            self.items.truncate(count);
        } else {
            for index in self.items.len()..count {
                match self.catalogue.item(index) {
                    Some(item) => self.items.push(item),
                    None => break,
                }
            }
        }

        self.refresh_content_key();
        debug!(items = self.items.len(), "Item count set");
        self.items.len()
    }

    /// Add one item.
    pub fn more_items(&mut self) -> usize {
        self.set_items_count(self.items.len() + 1)
    }

    /// Remove one item, stopping at zero.
    pub fn fewer_items(&mut self) -> usize {
        self.set_items_count(self.items.len().saturating_sub(1))
    }

    /// Switch to the next alignment.
    pub fn cycle_align(&mut self) -> Align {
        self.align = self.align.next();
        self.align
    }

    /// Whether the popover is open.
    pub fn is_open(&self) -> bool {
        self.panel.is_some()
    }

    /// Open the popover with a fresh panel. No-op if already open.
    pub fn open_panel(&mut self) {
        if self.panel.is_none() {
            info!(items = self.items.len(), "Popover opened");
            self.panel = Some(PopoverPanel::new(self.policy));
        }
    }

    /// Close the popover, discarding its layout state.
    pub fn close_panel(&mut self) {
        if self.panel.take().is_some() {
            info!("Popover closed");
        }
    }

    /// Open if closed, close if open.
    pub fn toggle_panel(&mut self) {
        if self.is_open() {
            self.close_panel();
        } else {
            self.open_panel();
        }
    }

    /// The open panel.
    ///
    /// # Errors
    ///
    /// `ContextError::MissingProvider` when the popover is closed.
    pub fn panel(&self, consumer: &'static str) -> Result<&PopoverPanel, ContextError> {
        require_panel(self.panel.as_ref(), consumer)
    }

    /// The open panel, mutably.
    ///
    /// # Errors
    ///
    /// `ContextError::MissingProvider` when the popover is closed.
    pub fn panel_mut(&mut self, consumer: &'static str) -> Result<&mut PopoverPanel, ContextError> {
        require_panel_mut(self.panel.as_mut(), consumer)
    }

    /// The open panel together with the items it lays out.
    ///
    /// # Errors
    ///
    /// `ContextError::MissingProvider` when the popover is closed.
    pub fn popover_parts(
        &mut self,
        consumer: &'static str,
    ) -> Result<(&mut PopoverPanel, &[MenuItem]), ContextError> {
        let panel = require_panel_mut(self.panel.as_mut(), consumer)?;
        Ok((panel, &self.items))
    }

    /// Flip one item's expansion. Returns whether content changed.
    pub fn toggle_item(&mut self, index: ItemIndex) -> bool {
        let changed = self
            .items
            .get_mut(index.get())
            .is_some_and(MenuItem::toggle);
        if changed {
            debug!(index = index.get(), "Item expansion toggled");
            self.refresh_content_key();
        }
        changed
    }

    /// Collapse everything if any item is expanded, otherwise expand all.
    ///
    /// Returns whether content changed.
    pub fn toggle_all_expanded(&mut self) -> bool {
        let expand = !self.items.iter().any(MenuItem::is_expanded);
        let mut changed = false;
        for item in &mut self.items {
            changed |= item.set_expanded(expand);
        }
        if changed {
            self.refresh_content_key();
        }
        changed
    }

    /// Apply a key action. Returns `true` when the app should quit.
    pub fn apply_action(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::TogglePanel => self.toggle_panel(),
            KeyAction::ClosePanel => self.close_panel(),
            KeyAction::MoreItems => {
                self.more_items();
            }
            KeyAction::FewerItems => {
                self.fewer_items();
            }
            KeyAction::CycleAlign => {
                self.cycle_align();
            }
            KeyAction::ToggleAllExpanded => {
                self.toggle_all_expanded();
            }
            KeyAction::Quit => return true,
        }
        false
    }

    fn refresh_content_key(&mut self) {
        let mut hasher = DefaultHasher::new();
        self.items.hash(&mut hasher);
        self.content_key = hasher.finish();
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
