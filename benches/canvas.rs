//! Canvas benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use mochi_paint::core::{line, Color, Grid, Point};

fn bench_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("line");

    group.throughput(Throughput::Elements(1001));
    group.bench_function("rasterize_1000", |b| {
        b.iter(|| line(black_box(Point::new(0, 0)), black_box(Point::new(1000, 377))).count())
    });

    group.bench_function("draw_diagonals", |b| {
        b.iter(|| {
            let mut grid = Grid::new(200, 100).unwrap();
            for x in (0..200).step_by(10) {
                grid.draw_line(Point::new(x, 0), Point::new(199 - x, 99), '#', Color::Red)
                    .unwrap();
            }
            black_box(grid)
        })
    });

    group.finish();
}

fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill");

    group.throughput(Throughput::Elements(200 * 100));
    group.bench_function("fill_empty_grid", |b| {
        b.iter(|| {
            let mut grid = Grid::new(200, 100).unwrap();
            black_box(grid.fill(Point::new(100, 50), Color::Blue).unwrap())
        })
    });

    // A comb of walls forces the fill through narrow corridors
    let mut comb = Grid::new(200, 100).unwrap();
    for x in (1..200).step_by(2) {
        let (top, bottom) = if x % 4 == 1 { (0, 98) } else { (1, 99) };
        comb.draw_line(Point::new(x, top), Point::new(x, bottom), '|', Color::White)
            .unwrap();
    }
    group.bench_function("fill_comb", |b| {
        b.iter(|| {
            let mut grid = comb.clone();
            black_box(grid.fill(Point::new(0, 0), Color::Green).unwrap())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_line, bench_fill);
criterion_main!(benches);
