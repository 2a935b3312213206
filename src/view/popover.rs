//! Popover panel rendering.
//!
//! Two passes per frame:
//! 1. Measurement: while the controller is unmeasured, every item is laid
//!    out flat at the column width and its bounding box registered. Layout
//!    goes through the same `item_lines` the commit pass draws, and nothing
//!    from this pass reaches the terminal.
//! 2. Commit: once packed, the columns are drawn left to right below the
//!    anchor, clipped to the budget.

use super::constants::PANEL_BORDER;
use super::item::{item_height, item_lines, text_width};
use super::styles::MenuStyles;
use crate::layout::{Budget, Column, ItemHandle, ItemIndex, LayoutInputs};
use crate::model::{ContextError, MenuItem};
use crate::state::{AppState, PopoverPanel};
use ratatui::{
    buffer::Buffer,
    layout::{Rect, Size},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
    Frame,
};
use tracing::{debug, warn};

/// Consumer name reported when the popover is rendered without a panel.
pub const POPOVER_CONSUMER: &str = "popover view";

const EMPTY_TEXT: &str = "No items";

/// Render the open popover below `anchor`, inside `container`.
///
/// # Errors
///
/// `ContextError::MissingProvider` when called while the popover is closed.
pub fn render_popover(
    frame: &mut Frame,
    state: &mut AppState,
    anchor: Rect,
    container: Rect,
    styles: &MenuStyles,
) -> Result<(), ContextError> {
    let column_width = state.column_width();
    let content_key = state.content_key();
    let screen = frame.area();
    let viewport = Size::new(screen.width, screen.height);

    let (panel, items) = state.popover_parts(POPOVER_CONSUMER)?;
    measure_and_settle(
        panel,
        items,
        content_key,
        column_width,
        container,
        viewport,
        styles,
    );

    let budget = panel.measurement().budget();
    let columns = panel.controller().state().columns().map(<[Column]>::to_vec);
    match (columns, budget) {
        (Some(columns), Some(budget)) => {
            let placement = place_panel(&columns, column_width, anchor, container, budget);
            let hits = draw_columns(
                frame.buffer_mut(),
                placement,
                &columns,
                items,
                column_width,
                styles,
            );
            panel.set_rendered(Some(placement), hits);
        }
        _ => panel.set_rendered(None, Vec::new()),
    }

    Ok(())
}

/// Sync inputs, run the hidden measurement pass if needed, and try to pack.
pub fn measure_and_settle(
    panel: &mut PopoverPanel,
    items: &[MenuItem],
    content_key: u64,
    column_width: u16,
    container: Rect,
    viewport: Size,
    styles: &MenuStyles,
) {
    if panel.measurement_mut().observe(container, viewport) {
        debug!(
            geometry = ?panel.measurement().geometry(),
            budget = ?panel.measurement().budget(),
            "Container geometry changed"
        );
    }

    let inputs = LayoutInputs {
        item_count: items.len(),
        content_key,
        budget: panel.measurement().budget(),
    };
    panel.controller_mut().sync(inputs);

    if panel.controller().needs_measurement() {
        for (index, handle) in measure_items(items, text_width(column_width), styles) {
            if let Err(err) = panel.controller_mut().register(index, handle) {
                warn!(error = %err, "Dropped stale item measurement");
            }
        }
    }

    panel.controller_mut().settle();
}

/// Lay items out flat, one under another, and return their bounding boxes.
pub fn measure_items(
    items: &[MenuItem],
    width: u16,
    styles: &MenuStyles,
) -> Vec<(ItemIndex, ItemHandle)> {
    let mut y = 0u16;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let height = item_height(item, width, styles);
            let area = Rect::new(0, y, width, height);
            y = y.saturating_add(height);
            (ItemIndex::new(i), ItemHandle::measured(area))
        })
        .collect()
}

/// Panel rectangle for the packed columns.
///
/// Starts at the anchor column on the container's top row, shifted left to
/// stay on screen. Width is capped by `budget.max_width`, content height by
/// `budget.max_height`; both are clipped to the container.
pub fn place_panel(
    columns: &[Column],
    column_width: u16,
    anchor: Rect,
    container: Rect,
    budget: Budget,
) -> Rect {
    let (content_width, content_height) = if columns.is_empty() {
        (column_width, 1)
    } else {
        let count = u16::try_from(columns.len()).unwrap_or(u16::MAX);
        let tallest = columns.iter().map(Column::height).max().unwrap_or(0);
        let tallest = u16::try_from(tallest).unwrap_or(u16::MAX);
        (
            count.saturating_mul(column_width),
            tallest.min(budget.max_height),
        )
    };

    let width = content_width
        .saturating_add(PANEL_BORDER)
        .min(budget.max_width)
        .min(container.width);
    let height = content_height
        .saturating_add(PANEL_BORDER)
        .min(container.height);

    let max_x = container.right().saturating_sub(width);
    let x = anchor.x.min(max_x).max(container.x);

    Rect::new(x, container.y, width, height)
}

/// Draw the packed columns into `area`. Returns the header row of every
/// drawn item, for hit testing.
pub fn draw_columns(
    buf: &mut Buffer,
    area: Rect,
    columns: &[Column],
    items: &[MenuItem],
    column_width: u16,
    styles: &MenuStyles,
) -> Vec<(ItemIndex, Rect)> {
    Clear.render(area, buf);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles.border);
    let inner = block.inner(area);
    block.render(area, buf);

    if columns.is_empty() {
        Paragraph::new(Line::from(Span::styled(EMPTY_TEXT, styles.muted))).render(inner, buf);
        return Vec::new();
    }

    let width = text_width(column_width);
    let mut hits = Vec::new();

    for (k, column) in columns.iter().enumerate() {
        let offset = u16::try_from(k)
            .unwrap_or(u16::MAX)
            .saturating_mul(column_width);
        let x = inner.x.saturating_add(offset);
        if x >= inner.right() {
            break;
        }
        let visible_width = width.min(inner.right() - x);

        let mut y = inner.y;
        for &index in column.items() {
            if y >= inner.bottom() {
                break;
            }
            let Some(item) = items.get(index.get()) else {
                continue;
            };
            let lines = item_lines(item, width, styles);
            let height = row_count(&lines);
            let visible_height = height.min(inner.bottom() - y);

            Paragraph::new(lines).render(Rect::new(x, y, visible_width, visible_height), buf);
            hits.push((index, Rect::new(x, y, visible_width, 1)));
            y = y.saturating_add(height);
        }
    }

    hits
}

fn row_count(lines: &[Line<'_>]) -> u16 {
    u16::try_from(lines.len()).unwrap_or(u16::MAX)
}

#[cfg(test)]
#[path = "popover_tests.rs"]
mod tests;
