//! UI state machine (pure).
//!
//! All state transitions are plain functions testable without TUI.

pub mod app_state;
pub mod mouse_handler;
pub mod panel;

// Re-export for convenience
pub use app_state::AppState;
pub use mouse_handler::{detect_click, handle_click, ClickTarget};
pub use panel::{require_panel, require_panel_mut, PopoverPanel, PANEL_PROVIDER};
