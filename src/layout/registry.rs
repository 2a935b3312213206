//! Item registry: measured element handles keyed by source index.

use super::types::ItemIndex;
use ratatui::layout::Rect;
use thiserror::Error;

/// Errors from registering an item handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The index lies outside `[0, expected)`. Happens when a stale mount
    /// reports after the item count shrank.
    #[error("item index {index} out of range (expected {expected} items)")]
    IndexOutOfRange {
        /// Index that was reported.
        index: ItemIndex,
        /// Number of items the registry currently expects.
        expected: usize,
    },
}

/// Handle to a rendered item: its bounding box once laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemHandle {
    area: Option<Rect>,
}

impl ItemHandle {
    /// Handle for an element that has been laid out at `area`.
    pub fn measured(area: Rect) -> Self {
        Self { area: Some(area) }
    }

    /// Handle for an element that is mounted but not yet laid out.
    pub fn pending() -> Self {
        Self { area: None }
    }

    /// Bounding box, if known.
    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    /// Measured height in rows, if resolvable.
    pub fn height(&self) -> Option<u16> {
        self.area.map(|area| area.height)
    }
}

/// Result of asking the registry for every item height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeightsSnapshot {
    /// Every expected index has a resolvable height, in source order.
    Complete(Vec<(ItemIndex, u16)>),
    /// At least one expected index has no handle or no resolvable height.
    Incomplete {
        /// Number of indices still missing a height.
        missing: usize,
    },
}

/// Collects item handles for one measurement cycle.
#[derive(Debug, Clone, Default)]
pub struct ItemRegistry {
    slots: Vec<Option<ItemHandle>>,
}

impl ItemRegistry {
    /// Create a registry expecting `expected` items.
    pub fn new(expected: usize) -> Self {
        Self {
            slots: vec![None; expected],
        }
    }

    /// Number of items this registry waits for.
    pub fn expected(&self) -> usize {
        self.slots.len()
    }

    /// Number of indices with any handle registered.
    pub fn registered(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Drop all handles and wait for `expected` items.
    pub fn reset(&mut self, expected: usize) {
        self.slots.clear();
        self.slots.resize(expected, None);
    }

    /// Drop all handles, keeping the expected count.
    pub fn clear(&mut self) {
        let expected = self.expected();
        self.reset(expected);
    }

    /// Register (or overwrite) the handle at `index`.
    ///
    /// Returns the handle previously stored at that index, if any.
    pub fn register(
        &mut self,
        index: ItemIndex,
        handle: ItemHandle,
    ) -> Result<Option<ItemHandle>, RegistryError> {
        let expected = self.expected();
        let slot = self
            .slots
            .get_mut(index.get())
            .ok_or(RegistryError::IndexOutOfRange { index, expected })?;
        Ok(slot.replace(handle))
    }

    /// Height registered at `index`, if any.
    pub fn height(&self, index: ItemIndex) -> Option<u16> {
        self.slots
            .get(index.get())
            .copied()
            .flatten()
            .and_then(|handle| handle.height())
    }

    /// Heights of every item in source order, or `Incomplete`.
    pub fn heights_snapshot(&self) -> HeightsSnapshot {
        let heights: Vec<(ItemIndex, u16)> = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| {
                slot.and_then(|handle| handle.height())
                    .map(|height| (ItemIndex::new(i), height))
            })
            .collect();

        let missing = self.slots.len() - heights.len();
        if missing == 0 {
            HeightsSnapshot::Complete(heights)
        } else {
            HeightsSnapshot::Incomplete { missing }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(height: u16) -> ItemHandle {
        ItemHandle::measured(Rect::new(0, 0, 10, height))
    }

    #[test]
    fn empty_registry_is_complete() {
        let registry = ItemRegistry::new(0);
        assert_eq!(registry.heights_snapshot(), HeightsSnapshot::Complete(vec![]));
    }

    #[test]
    fn incomplete_until_every_index_registered() {
        let mut registry = ItemRegistry::new(3);
        registry.register(ItemIndex::new(0), rows(1)).unwrap();
        registry.register(ItemIndex::new(2), rows(2)).unwrap();

        assert_eq!(
            registry.heights_snapshot(),
            HeightsSnapshot::Incomplete { missing: 1 }
        );

        registry.register(ItemIndex::new(1), rows(3)).unwrap();
        assert_eq!(
            registry.heights_snapshot(),
            HeightsSnapshot::Complete(vec![
                (ItemIndex::new(0), 1),
                (ItemIndex::new(1), 3),
                (ItemIndex::new(2), 2),
            ])
        );
    }

    #[test]
    fn registration_order_does_not_matter() {
        let mut registry = ItemRegistry::new(2);
        registry.register(ItemIndex::new(1), rows(5)).unwrap();
        registry.register(ItemIndex::new(0), rows(4)).unwrap();
        assert_eq!(
            registry.heights_snapshot(),
            HeightsSnapshot::Complete(vec![(ItemIndex::new(0), 4), (ItemIndex::new(1), 5)])
        );
    }

    #[test]
    fn pending_handle_is_not_resolvable() {
        let mut registry = ItemRegistry::new(1);
        registry
            .register(ItemIndex::new(0), ItemHandle::pending())
            .unwrap();
        assert_eq!(registry.registered(), 1);
        assert_eq!(
            registry.heights_snapshot(),
            HeightsSnapshot::Incomplete { missing: 1 }
        );
    }

    #[test]
    fn re_registering_overwrites() {
        let mut registry = ItemRegistry::new(1);
        registry.register(ItemIndex::new(0), rows(2)).unwrap();
        let previous = registry.register(ItemIndex::new(0), rows(7)).unwrap();

        assert_eq!(previous, Some(rows(2)));
        assert_eq!(registry.height(ItemIndex::new(0)), Some(7));
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut registry = ItemRegistry::new(2);
        let err = registry.register(ItemIndex::new(2), rows(1)).unwrap_err();
        assert_eq!(
            err,
            RegistryError::IndexOutOfRange {
                index: ItemIndex::new(2),
                expected: 2
            }
        );
    }

    #[test]
    fn reset_clears_and_resizes() {
        let mut registry = ItemRegistry::new(2);
        registry.register(ItemIndex::new(0), rows(1)).unwrap();
        registry.reset(4);

        assert_eq!(registry.expected(), 4);
        assert_eq!(registry.registered(), 0);
    }

    #[test]
    fn clear_keeps_expected_count() {
        let mut registry = ItemRegistry::new(3);
        registry.register(ItemIndex::new(1), rows(1)).unwrap();
        registry.clear();

        assert_eq!(registry.expected(), 3);
        assert_eq!(registry.registered(), 0);
    }
}
