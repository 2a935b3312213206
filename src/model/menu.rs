//! Menu items and bar alignment.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One entry of a popover menu.
///
/// A tagged union: plain items and items carrying a nested list. Rendering
/// and measurement dispatch on the variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", deny_unknown_fields)]
pub enum MenuItem {
    /// A single selectable entry.
    Leaf {
        /// Display text.
        label: String,
    },
    /// An entry with nested sub-items that can be shown or hidden.
    Expandable {
        /// Header text.
        label: String,
        /// Nested entries, shown when expanded.
        children: Vec<String>,
        /// Whether the children are currently shown.
        #[serde(default)]
        expanded: bool,
    },
}

impl MenuItem {
    /// Create a leaf item.
    pub fn leaf(label: impl Into<String>) -> Self {
        MenuItem::Leaf {
            label: label.into(),
        }
    }

    /// Create a collapsed expandable item.
    pub fn expandable(label: impl Into<String>, children: Vec<String>) -> Self {
        MenuItem::Expandable {
            label: label.into(),
            children,
            expanded: false,
        }
    }

    /// Display text of the item (header text for expandables).
    pub fn label(&self) -> &str {
        match self {
            MenuItem::Leaf { label } | MenuItem::Expandable { label, .. } => label,
        }
    }

    /// Whether the item has a nested list.
    pub fn is_expandable(&self) -> bool {
        matches!(self, MenuItem::Expandable { .. })
    }

    /// Whether nested children are currently shown. Always false for leaves.
    pub fn is_expanded(&self) -> bool {
        match self {
            MenuItem::Leaf { .. } => false,
            MenuItem::Expandable { expanded, .. } => *expanded,
        }
    }

    /// Flip the expansion state. Returns `false` for leaves (nothing changed).
    pub fn toggle(&mut self) -> bool {
        self.set_expanded(!self.is_expanded())
    }

    /// Set the expansion state. Returns whether anything changed.
    pub fn set_expanded(&mut self, value: bool) -> bool {
        match self {
            MenuItem::Leaf { .. } => false,
            MenuItem::Expandable { expanded, .. } => {
                let changed = *expanded != value;
                *expanded = value;
                changed
            }
        }
    }
}

/// Horizontal alignment of the bar content. Never affects packing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Content starts at the left edge.
    #[default]
    Left,
    /// Content is centered.
    Center,
    /// Content ends at the right edge.
    Right,
}

/// Error parsing an [`Align`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown alignment {0:?} (expected left, center or right)")]
pub struct InvalidAlign(pub String);

impl Align {
    /// All alignments, in cycle order.
    pub const ALL: [Align; 3] = [Align::Left, Align::Center, Align::Right];

    /// Next alignment in cycle order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Align::Left => Align::Center,
            Align::Center => Align::Right,
            Align::Right => Align::Left,
        }
    }

    /// Lowercase name, as accepted by config and CLI.
    pub fn as_str(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

impl FromStr for Align {
    type Err = InvalidAlign;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Align::ALL
            .into_iter()
            .find(|align| align.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InvalidAlign(s.to_string()))
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
