//! Greedy column packer.
//!
//! Walks the items once in source order and fills each column until the next
//! item would push it past the budget, then starts a new column. No
//! backtracking and no rebalancing: columns may be unevenly filled.

use super::types::{Column, ColumnBudget, ItemIndex};

/// Partition measured items into columns.
///
/// # Contract
/// - Concatenating the returned columns reproduces the input order exactly.
/// - Every column either fits within `budget` or holds a single item that is
///   taller than the budget on its own. Oversized items are never dropped or
///   split.
/// - An empty input yields no columns.
/// - Deterministic: the same input always yields the same columns.
///
/// # Examples
///
/// ```
/// # use colbar::layout::{pack, format_columns, ColumnBudget, ItemIndex};
/// let heights = [(ItemIndex::new(0), 100), (ItemIndex::new(1), 100), (ItemIndex::new(2), 100)];
/// let columns = pack(&heights, ColumnBudget::new(250).unwrap());
/// assert_eq!(format_columns(&columns), "[[0, 1], [2]]");
/// ```
pub fn pack(heights: &[(ItemIndex, u16)], budget: ColumnBudget) -> Vec<Column> {
    let max_height = u32::from(budget.get());
    let mut columns: Vec<Column> = Vec::new();

    for &(index, height) in heights {
        match columns.last_mut() {
            Some(current) if current.height() + u32::from(height) <= max_height => {
                current.push(index, height);
            }
            _ => columns.push(Column::starting_with(index, height)),
        }
    }

    columns
}

#[cfg(test)]
#[path = "packer_tests.rs"]
mod tests;
