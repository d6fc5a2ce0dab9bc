//! Scroll benchmark: Measure write-path and refresh throughput.
//!
//! Target: a full 25x80 refresh well under one frame at 60 Hz

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use palimpsest::{refresh, Arg, Cell, Console, ScrollBuffer, SliceGrid};

const COLUMNS: usize = 80;
const WINDOW: usize = 25;
const RING: usize = 2 * WINDOW;

fn put_char_stream(c: &mut Criterion) {
    // A text stream that exercises wrapping and scrolling: printable
    // runs broken by newlines.
    let mut stream = Vec::with_capacity(4096);
    for i in 0..64 {
        stream.extend_from_slice(&b"lorem ipsum dolor sit amet "[..]);
        if i % 3 == 0 {
            stream.push(b'\n');
        }
    }

    let mut group = c.benchmark_group("scroll");
    group.throughput(Throughput::Bytes(stream.len() as u64));
    group.bench_function("put_char_stream", |b| {
        let mut arena = vec![Cell::NULL; RING * COLUMNS];
        b.iter(|| {
            let mut term = ScrollBuffer::new(&mut arena, RING, COLUMNS, WINDOW);
            term.write(black_box(&stream));
        })
    });
    group.finish();
}

fn refresh_full_window(c: &mut Criterion) {
    let mut arena = vec![Cell::NULL; RING * COLUMNS];
    let mut term = ScrollBuffer::new(&mut arena, RING, COLUMNS, WINDOW);
    for i in 0..RING {
        term.put_str(&format!("ring row number {i}\n"));
    }
    let mut region = vec![Cell::NULL; WINDOW * COLUMNS];
    let mut grid = SliceGrid::new(&mut region, COLUMNS, WINDOW);

    c.bench_function("refresh_25x80", |b| {
        b.iter(|| refresh(black_box(&term), &mut grid))
    });
}

fn printf_path(c: &mut Criterion) {
    let mut region = vec![Cell::NULL; WINDOW * COLUMNS];
    let grid = SliceGrid::new(&mut region, COLUMNS, WINDOW);
    let mut arena = vec![Cell::NULL; RING * COLUMNS];
    let mut console = Console::new(&mut arena, RING, grid);

    c.bench_function("printf_line", |b| {
        b.iter(|| {
            console.printf(
                black_box("irq %d vector %x\n"),
                black_box(&[Arg::from(11u32), Arg::from(0xdeadu32)]),
            );
        })
    });
}

criterion_group!(benches, put_char_stream, refresh_full_window, printf_path);
criterion_main!(benches);
