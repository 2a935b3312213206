//! Rendering of a single menu item into lines.
//!
//! Both the hidden measurement pass and the packed commit pass go through
//! [`item_lines`], so a measured height always matches what gets drawn.

use super::constants::{CHILD_INDENT, COLUMN_GAP};
use super::styles::MenuStyles;
use crate::model::MenuItem;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const COLLAPSED_MARKER: &str = "▸ ";
const EXPANDED_MARKER: &str = "▾ ";

/// Width available to item text inside a column of `column_width`.
pub fn text_width(column_width: u16) -> u16 {
    column_width.saturating_sub(COLUMN_GAP).max(1)
}

/// Word-wrap `text` to lines no wider than `width` display cells.
///
/// Words longer than `width` are split at character boundaries. Always
/// returns at least one line.
pub fn wrap_label(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };

        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
        } else {
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if current_width + ch_width > width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Lines for `item` when laid out `width` cells wide.
///
/// - Leaf: the wrapped label.
/// - Expandable: a marker plus the wrapped label; when expanded, each child
///   wrapped and indented below it.
pub fn item_lines(item: &MenuItem, width: u16, styles: &MenuStyles) -> Vec<Line<'static>> {
    match item {
        MenuItem::Leaf { label } => wrap_label(label, width)
            .into_iter()
            .map(|text| Line::from(Span::styled(text, styles.item)))
            .collect(),
        MenuItem::Expandable {
            label,
            children,
            expanded,
        } => {
            let marker = if *expanded {
                EXPANDED_MARKER
            } else {
                COLLAPSED_MARKER
            };
            let marker_width = u16::try_from(marker.width()).unwrap_or(u16::MAX);
            let label_width = width.saturating_sub(marker_width);
            let pad = " ".repeat(usize::from(marker_width));

            let mut lines: Vec<Line<'static>> = wrap_label(label, label_width)
                .into_iter()
                .enumerate()
                .map(|(i, text)| {
                    let lead = if i == 0 { marker.to_string() } else { pad.clone() };
                    Line::from(vec![
                        Span::styled(lead, styles.expandable),
                        Span::styled(text, styles.expandable),
                    ])
                })
                .collect();

            if *expanded {
                let indent = " ".repeat(usize::from(CHILD_INDENT));
                let child_width = width.saturating_sub(CHILD_INDENT);
                for child in children {
                    for text in wrap_label(child, child_width) {
                        lines.push(Line::from(Span::styled(
                            format!("{}{}", indent, text),
                            styles.child,
                        )));
                    }
                }
            }

            lines
        }
    }
}

/// Height in rows of `item` at `width`.
pub fn item_height(item: &MenuItem, width: u16, styles: &MenuStyles) -> u16 {
    u16::try_from(item_lines(item, width, styles).len()).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn short_label_is_one_line() {
        assert_eq!(wrap_label("Home", 10), vec!["Home"]);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        assert_eq!(
            wrap_label("Billing and invoices", 12),
            vec!["Billing and", "invoices"]
        );
    }

    #[test]
    fn splits_overlong_words() {
        assert_eq!(wrap_label("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn empty_label_is_one_empty_line() {
        assert_eq!(wrap_label("", 5), vec![String::new()]);
    }

    #[test]
    fn wide_characters_count_double() {
        assert_eq!(wrap_label("日本語", 4), vec!["日本", "語"]);
    }

    #[test]
    fn text_width_leaves_gap() {
        assert_eq!(text_width(24), 23);
        assert_eq!(text_width(0), 1);
    }

    #[test]
    fn leaf_height_follows_wrapping() {
        let styles = MenuStyles::default();
        let item = MenuItem::leaf("Security settings and audit log");
        assert_eq!(item_height(&item, 40, &styles), 1);
        assert_eq!(item_height(&item, 12, &styles), 3);
    }

    #[test]
    fn collapsed_expandable_shows_header_only() {
        let styles = MenuStyles::default();
        let item = MenuItem::expandable("Docs", vec!["Guide".into(), "API".into()]);
        let lines = item_lines(&item, 20, &styles);
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "▸ Docs");
    }

    #[test]
    fn expanded_expandable_lists_children_indented() {
        let styles = MenuStyles::default();
        let mut item = MenuItem::expandable("Docs", vec!["Guide".into(), "API".into()]);
        item.toggle();

        let texts: Vec<String> = item_lines(&item, 20, &styles).iter().map(line_text).collect();
        assert_eq!(texts, vec!["▾ Docs", "  Guide", "  API"]);
    }

    #[test]
    fn expanding_increases_height() {
        let styles = MenuStyles::default();
        let mut item = MenuItem::expandable("Docs", vec!["A".into(), "B".into(), "C".into()]);
        let collapsed = item_height(&item, 20, &styles);
        item.toggle();
        assert_eq!(item_height(&item, 20, &styles), collapsed + 3);
    }
}
