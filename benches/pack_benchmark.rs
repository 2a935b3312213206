//! Column packing and measurement benchmarks.
//!
//! Packing is a single linear pass; these check it stays well under a frame
//! even for lists far longer than a menu would hold.
//!
//! Run with: cargo bench --bench pack_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use colbar::layout::{pack, ColumnBudget, ItemIndex};
use colbar::model::{Align, Catalogue};
use colbar::state::AppState;
use colbar::view::popover::measure_items;
use colbar::view::MenuStyles;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Heights cycling through 1..=5 rows.
fn generate_heights(count: usize) -> Vec<(ItemIndex, u16)> {
    (0..count)
        .map(|i| (ItemIndex::new(i), (i % 5 + 1) as u16))
        .collect()
}

fn benchmark_pack_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack_scaling");
    let budget = ColumnBudget::new(18).expect("positive budget");

    for count in [10, 200, 10_000] {
        let heights = generate_heights(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &heights, |b, heights| {
            b.iter(|| pack(black_box(heights), black_box(budget)));
        });
    }

    group.finish();
}

fn benchmark_measurement_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("measurement_pass");
    let styles = MenuStyles::default();

    for count in [12, 200] {
        let state = AppState::new(
            Catalogue::Generated,
            count,
            Align::Left,
            Default::default(),
            24,
        );
        group.bench_with_input(BenchmarkId::from_parameter(count), &state, |b, state| {
            b.iter(|| measure_items(black_box(state.items()), 23, &styles));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_pack_scaling, benchmark_measurement_pass);
criterion_main!(benches);
