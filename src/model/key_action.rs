//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Open the popover if closed, close it if open. Default: Enter/Space/o
    TogglePanel,
    /// Close the popover. Default: Esc
    ClosePanel,
    /// Add one item to the menu. Default: +/=
    MoreItems,
    /// Remove one item from the menu. Default: -
    FewerItems,
    /// Cycle bar alignment left → center → right. Default: a
    CycleAlign,
    /// Expand every expandable item, or collapse all if any is expanded. Default: x
    ToggleAllExpanded,
    /// Exit the application. Default: q
    Quit,
}
