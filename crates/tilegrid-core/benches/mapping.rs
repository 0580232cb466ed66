//! Benchmarks for the slot↔index mapping and contact resolution.
//!
//! # Benchmarks
//!
//! - **`remap_full_grid`**: maps every slot of a 6×6 grid to its logical
//!   index under each of the eight traversal-flag combinations.
//! - **`resolve_contacts`**: resolves a ten-contact batch against a 6×6
//!   geometry table.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench mapping
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use tilegrid_core::{GeometryTable, GridLayout, Point, Size, resolve_contacts};

fn flag_layouts() -> Vec<(String, GridLayout)> {
    let mut layouts = Vec::new();
    for horizontal in [true, false] {
        for forward in [true, false] {
            for ascending in [true, false] {
                let layout = GridLayout::new(6, 6)
                    .unwrap()
                    .with_horizontal(horizontal)
                    .with_forward(forward)
                    .with_ascending(ascending);
                let name = format!("h{}f{}a{}", u8::from(horizontal), u8::from(forward), u8::from(ascending));
                layouts.push((name, layout));
            }
        }
    }
    layouts
}

fn bench_remap_full_grid(c: &mut Criterion) {
    for (name, layout) in flag_layouts() {
        c.bench_with_input(
            BenchmarkId::new("remap_full_grid", name),
            &layout,
            |b, layout| {
                b.iter(|| {
                    for slot in layout.slots() {
                        hint::black_box(layout.index_at(hint::black_box(slot)));
                    }
                });
            },
        );
    }
}

fn bench_resolve_contacts(c: &mut Criterion) {
    let layout = GridLayout::new(6, 6).unwrap();
    let table = GeometryTable::compute(&layout, Size::new(600.0, 600.0));
    let contacts: Vec<Point> = (0..10)
        .map(|i| {
            let offset = i as f32 * 55.0;
            Point::new(offset + 5.0, offset + 5.0)
        })
        .collect();

    c.bench_function("resolve_contacts", |b| {
        b.iter(|| {
            hint::black_box(resolve_contacts(
                hint::black_box(contacts.iter().copied()),
                &table,
                &layout,
            ))
        });
    });
}

criterion_group!(benches, bench_remap_full_grid, bench_resolve_contacts);
criterion_main!(benches);
