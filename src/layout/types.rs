//! Core layout newtypes

use std::fmt;

/// Position of an item in the source list. 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ItemIndex(usize);

impl ItemIndex {
    /// Create a new ItemIndex from a raw 0-based value.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw 0-based index value.
    pub fn get(&self) -> usize {
        self.0
    }
}

impl From<usize> for ItemIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for ItemIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maximum cumulative height of one column, in rows. Always >= 1.
///
/// The packer only accepts a `ColumnBudget`, so a zero or unknown budget
/// can never reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ColumnBudget(u16);

impl ColumnBudget {
    /// Smart constructor. Returns `None` for a zero budget.
    pub fn new(rows: u16) -> Option<Self> {
        if rows == 0 {
            None
        } else {
            Some(Self(rows))
        }
    }

    /// Get the raw row count.
    pub fn get(&self) -> u16 {
        self.0
    }
}

/// One packed column: a contiguous run of items in source order.
///
/// # Invariants
/// - never empty
/// - indices strictly increasing
/// - `height` equals the sum of the heights of its items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    items: Vec<ItemIndex>,
    height: u32,
}

impl Column {
    pub(crate) fn starting_with(index: ItemIndex, height: u16) -> Self {
        Self {
            items: vec![index],
            height: u32::from(height),
        }
    }

    pub(crate) fn push(&mut self, index: ItemIndex, height: u16) {
        self.items.push(index);
        self.height += u32::from(height);
    }

    /// Items in this column, in source order.
    pub fn items(&self) -> &[ItemIndex] {
        &self.items
    }

    /// Sum of the measured heights of the items in this column.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of items in the column.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for columns produced by the packer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, index) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", index)?;
        }
        write!(f, "]")
    }
}

/// Render a column sequence as `[[0, 1], [2]]`.
pub fn format_columns(columns: &[Column]) -> String {
    let inner: Vec<String> = columns.iter().map(Column::to_string).collect();
    format!("[{}]", inner.join(", "))
}

/// Layout state of one open panel.
///
/// `Unmeasured` means items are rendered flat and hidden while their heights
/// are collected. `Packed` holds the columns for the current settled inputs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LayoutState {
    /// No columns computed yet for the current inputs.
    #[default]
    Unmeasured,
    /// Columns computed from a complete set of measurements.
    Packed(Vec<Column>),
}

impl LayoutState {
    /// Columns if packed, `None` while unmeasured.
    pub fn columns(&self) -> Option<&[Column]> {
        match self {
            LayoutState::Unmeasured => None,
            LayoutState::Packed(columns) => Some(columns),
        }
    }

    /// Whether the state is `Packed`.
    pub fn is_packed(&self) -> bool {
        matches!(self, LayoutState::Packed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod column_budget {
        use super::*;

        #[test]
        fn zero_is_rejected() {
            assert_eq!(ColumnBudget::new(0), None);
        }

        #[test]
        fn positive_is_accepted() {
            let budget = ColumnBudget::new(12).expect("positive budget");
            assert_eq!(budget.get(), 12);
        }
    }

    mod column {
        use super::*;

        #[test]
        fn push_accumulates_height() {
            let mut column = Column::starting_with(ItemIndex::new(0), 3);
            column.push(ItemIndex::new(1), 4);
            assert_eq!(column.height(), 7);
            assert_eq!(column.items(), &[ItemIndex::new(0), ItemIndex::new(1)]);
            assert_eq!(column.len(), 2);
            assert!(!column.is_empty());
        }

        #[test]
        fn display_lists_indices() {
            let mut column = Column::starting_with(ItemIndex::new(4), 1);
            column.push(ItemIndex::new(5), 1);
            assert_eq!(column.to_string(), "[4, 5]");
        }
    }

    #[test]
    fn format_columns_empty_sequence() {
        assert_eq!(format_columns(&[]), "[]");
    }

    #[test]
    fn unmeasured_has_no_columns() {
        let state = LayoutState::default();
        assert_eq!(state.columns(), None);
        assert!(!state.is_packed());
    }
}
