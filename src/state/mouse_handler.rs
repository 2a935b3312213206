//! Mouse event handler.
//!
//! Pure functions that transform AppState in response to mouse clicks.

use crate::layout::ItemIndex;
use crate::state::AppState;
use ratatui::layout::{Position, Rect};

/// What a left click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The bar trigger that opens the popover.
    Trigger,
    /// The header row of a packed item.
    Item(ItemIndex),
    /// Somewhere else inside the open panel.
    Panel,
    /// Outside both trigger and panel.
    Outside,
}

/// Classify a click at (`column`, `row`).
///
/// `trigger` is the trigger's last drawn rectangle, if any.
pub fn detect_click(state: &AppState, trigger: Option<Rect>, column: u16, row: u16) -> ClickTarget {
    if trigger.is_some_and(|area| area.contains(Position::new(column, row))) {
        return ClickTarget::Trigger;
    }

    let Ok(panel) = state.panel("click handler") else {
        return ClickTarget::Outside;
    };

    if let Some(index) = panel.hit_test(column, row) {
        ClickTarget::Item(index)
    } else if panel.contains(column, row) {
        ClickTarget::Panel
    } else {
        ClickTarget::Outside
    }
}

/// Handle a left click and update AppState accordingly.
///
/// - Trigger: toggle the popover.
/// - Item header: toggle its expansion (leaves ignore it).
/// - Outside an open panel: close it.
pub fn handle_click(state: &mut AppState, trigger: Option<Rect>, column: u16, row: u16) -> ClickTarget {
    let target = detect_click(state, trigger, column, row);
    match target {
        ClickTarget::Trigger => state.toggle_panel(),
        ClickTarget::Item(index) => {
            state.toggle_item(index);
        }
        ClickTarget::Panel => {}
        ClickTarget::Outside => state.close_panel(),
    }
    target
}
