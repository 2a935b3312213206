//! Layout dimension constants for TUI rendering.

/// Height of the menu bar in lines.
pub const BAR_HEIGHT: u16 = 1;

/// Height of the status line at the bottom of the screen.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Blank columns between the bar title and the trigger.
pub const BAR_GAP: u16 = 2;

/// Blank columns to the right of each packed column's text.
pub const COLUMN_GAP: u16 = 1;

/// Rows and columns taken by the popover border (both sides).
pub const PANEL_BORDER: u16 = 2;

/// Indent of nested child rows under an expandable item.
pub const CHILD_INDENT: u16 = 2;

/// Application title shown in the bar.
pub const BAR_TITLE: &str = " colbar ";
