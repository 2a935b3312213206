//! Tests for the greedy column packer.

use super::*;
use crate::layout::types::format_columns;

fn indexed(heights: &[u16]) -> Vec<(ItemIndex, u16)> {
    heights
        .iter()
        .enumerate()
        .map(|(i, &h)| (ItemIndex::new(i), h))
        .collect()
}

fn budget(rows: u16) -> ColumnBudget {
    ColumnBudget::new(rows).expect("test budget must be positive")
}

#[test]
fn empty_input_yields_no_columns() {
    let columns = pack(&[], budget(10));
    assert!(columns.is_empty(), "expected no columns, got {:?}", columns);
}

#[test]
fn three_equal_items_split_after_second() {
    let columns = pack(&indexed(&[100, 100, 100]), budget(250));
    insta::assert_snapshot!(format_columns(&columns), @"[[0, 1], [2]]");
}

#[test]
fn oversized_singleton_still_placed() {
    let columns = pack(&indexed(&[300]), budget(250));
    insta::assert_snapshot!(format_columns(&columns), @"[[0]]");
    assert_eq!(columns[0].height(), 300);
}

#[test]
fn oversized_item_in_the_middle_gets_own_column() {
    let columns = pack(&indexed(&[2, 2, 9, 2, 2]), budget(5));
    insta::assert_snapshot!(format_columns(&columns), @"[[0, 1], [2], [3, 4]]");
}

#[test]
fn oversized_first_item_does_not_leave_empty_column() {
    let columns = pack(&indexed(&[20, 1]), budget(5));
    assert_eq!(columns.len(), 2);
    assert!(columns.iter().all(|c| !c.is_empty()));
}

#[test]
fn exact_fit_stays_in_column() {
    let columns = pack(&indexed(&[3, 2, 5]), budget(5));
    insta::assert_snapshot!(format_columns(&columns), @"[[0, 1], [2]]");
}

#[test]
fn zero_height_items_join_current_column() {
    let columns = pack(&indexed(&[5, 0, 0, 1]), budget(5));
    insta::assert_snapshot!(format_columns(&columns), @"[[0, 1, 2], [3]]");
}

#[test]
fn all_items_fit_in_one_column() {
    let columns = pack(&indexed(&[1, 1, 1, 1]), budget(40));
    assert_eq!(columns.len(), 1);
    assert_eq!(columns[0].height(), 4);
}

#[test]
fn greedy_does_not_rebalance() {
    // A balanced split would be [[0, 1], [2, 3]]; greedy fills the first column.
    let columns = pack(&indexed(&[1, 1, 1, 1]), budget(3));
    insta::assert_snapshot!(format_columns(&columns), @"[[0, 1, 2], [3]]");
}

#[test]
fn preserves_non_contiguous_source_indices() {
    let heights = vec![
        (ItemIndex::new(2), 1),
        (ItemIndex::new(5), 1),
        (ItemIndex::new(9), 1),
    ];
    let columns = pack(&heights, budget(2));
    insta::assert_snapshot!(format_columns(&columns), @"[[2, 5], [9]]");
}

#[test]
fn heights_near_u16_max_do_not_overflow() {
    let columns = pack(&indexed(&[u16::MAX, u16::MAX]), budget(u16::MAX));
    assert_eq!(columns.len(), 2);
    assert_eq!(columns[0].height(), u32::from(u16::MAX));
}
