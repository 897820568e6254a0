use criterion::{criterion_group, criterion_main, Criterion};
use maze_layout::{
    generators,
    units::{ColumnsCount, RowsCount},
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn bench_recursive_backtracker_maze_32(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(32);
    c.bench_function("recursive_backtracker_maze_32", move |b| {
        b.iter(|| generators::generate_maze(RowsCount(32), ColumnsCount(32), &mut rng).unwrap())
    });
}

fn bench_recursive_backtracker_maze_256(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(256);
    c.bench_function("recursive_backtracker_maze_256", move |b| {
        b.iter(|| generators::generate_maze(RowsCount(256), ColumnsCount(256), &mut rng).unwrap())
    });
}

criterion_group!(
    benches,
    bench_recursive_backtracker_maze_32,
    bench_recursive_backtracker_maze_256
);
criterion_main!(benches);
