//! Menu bar and popover styling.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors explicitly on or off.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::new(true)
    }
}

// ===== MenuStyles =====

/// Styles for the bar and popover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuStyles {
    /// Bar background row.
    pub bar: Style,
    /// Application title in the bar.
    pub title: Style,
    /// Trigger while the popover is closed.
    pub trigger: Style,
    /// Trigger while the popover is open.
    pub trigger_open: Style,
    /// Popover border.
    pub border: Style,
    /// Leaf item text.
    pub item: Style,
    /// Expandable item header.
    pub expandable: Style,
    /// Nested child rows.
    pub child: Style,
    /// Hints and empty-state text.
    pub muted: Style,
}

impl MenuStyles {
    /// Styles for the given color configuration.
    ///
    /// Without colors only modifiers remain, so the trigger state and headers
    /// stay distinguishable.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                bar: Style::default().bg(Color::DarkGray),
                title: Style::default()
                    .fg(Color::White)
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
                trigger: Style::default().fg(Color::Cyan).bg(Color::DarkGray),
                trigger_open: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                border: Style::default().fg(Color::Cyan),
                item: Style::default().fg(Color::White),
                expandable: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                child: Style::default().fg(Color::Gray),
                muted: Style::default().fg(Color::DarkGray),
            }
        } else {
            Self {
                bar: Style::default(),
                title: Style::default().add_modifier(Modifier::BOLD),
                trigger: Style::default(),
                trigger_open: Style::default().add_modifier(Modifier::REVERSED),
                border: Style::default(),
                item: Style::default(),
                expandable: Style::default().add_modifier(Modifier::BOLD),
                child: Style::default(),
                muted: Style::default().add_modifier(Modifier::DIM),
            }
        }
    }
}

impl Default for MenuStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::default())
    }
}
