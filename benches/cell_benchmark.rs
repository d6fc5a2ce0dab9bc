//! Cell benchmark: Measure codec pack/unpack performance.
//!
//! Target: < 1ns per pack

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use palimpsest::{Attr, Cell, Color};

fn attr_pack(c: &mut Criterion) {
    c.bench_function("attr_pack", |b| {
        b.iter(|| Attr::new(black_box(Color::LightGrey), black_box(Color::Black)))
    });
}

fn cell_pack(c: &mut Criterion) {
    let attr = Attr::new(Color::LightGrey, Color::Black);
    c.bench_function("cell_pack", |b| {
        b.iter(|| Cell::new(black_box(b'A'), black_box(attr)))
    });
}

fn cell_unpack(c: &mut Criterion) {
    let cell = Cell::new(b'A', Attr::new(Color::White, Color::Blue));
    c.bench_function("cell_unpack_glyph", |b| b.iter(|| black_box(cell).glyph()));
    c.bench_function("cell_unpack_attr", |b| b.iter(|| black_box(cell).attr()));
}

fn color_decode(c: &mut Criterion) {
    c.bench_function("color_from_nibble", |b| {
        b.iter(|| Color::from_nibble(black_box(0x0B)))
    });
}

criterion_group!(benches, attr_pack, cell_pack, cell_unpack, color_decode);
criterion_main!(benches);
