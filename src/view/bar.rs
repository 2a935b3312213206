//! Horizontal application bar and status line.

use super::constants::{BAR_GAP, BAR_TITLE};
use super::styles::MenuStyles;
use crate::model::Align;
use crate::state::AppState;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Where the bar put its pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarLayout {
    /// Title rectangle.
    pub title: Rect,
    /// Trigger rectangle; the popover anchor.
    pub trigger: Rect,
}

/// Trigger text for a menu with `items_count` items.
pub fn trigger_label(items_count: usize, open: bool) -> String {
    let arrow = if open { "▴" } else { "▾" };
    format!(" ☰ Menu ({}) {} ", items_count, arrow)
}

/// Position title and trigger within `area` according to `align`.
///
/// Content wider than the bar starts at the left edge and is clipped.
pub fn bar_layout(area: Rect, align: Align, title_width: u16, trigger_width: u16) -> BarLayout {
    let content = title_width
        .saturating_add(BAR_GAP)
        .saturating_add(trigger_width);
    let free = area.width.saturating_sub(content);
    let offset = match align {
        Align::Left => 0,
        Align::Center => free / 2,
        Align::Right => free,
    };

    let title_x = area.x.saturating_add(offset);
    let title = Rect::new(title_x, area.y, title_width, 1).intersection(area);

    let trigger_x = title_x.saturating_add(title_width).saturating_add(BAR_GAP);
    let trigger = Rect::new(trigger_x, area.y, trigger_width, 1).intersection(area);

    BarLayout { title, trigger }
}

/// Render the bar into `area` and report where the trigger landed.
pub fn render_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &MenuStyles) -> BarLayout {
    frame.render_widget(Block::default().style(styles.bar), area);

    let trigger_text = trigger_label(state.items_count(), state.is_open());
    let title_width = u16::try_from(BAR_TITLE.width()).unwrap_or(u16::MAX);
    let trigger_width = u16::try_from(trigger_text.width()).unwrap_or(u16::MAX);
    let layout = bar_layout(area, state.align, title_width, trigger_width);

    let trigger_style = if state.is_open() {
        styles.trigger_open
    } else {
        styles.trigger
    };

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(BAR_TITLE, styles.title))),
        layout.title,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(trigger_text, trigger_style))),
        layout.trigger,
    );

    layout
}

/// Render the key hint line.
pub fn render_status(frame: &mut Frame, area: Rect, state: &AppState, styles: &MenuStyles) {
    let hint = format!(
        " Enter menu · +/- items ({}) · a align ({}) · x expand · q quit ",
        state.items_count(),
        state.align
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(hint, styles.muted))),
        area,
    );
}
