use criterion::{criterion_group, criterion_main, Criterion};
use maze_layout::{
    cells::CellCoordinate,
    generators,
    pathing,
    units::{ColumnsCount, RowsCount},
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn bench_distances_128(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(128);
    let walls = generators::generate_maze(RowsCount(128), ColumnsCount(128), &mut rng).unwrap();

    c.bench_function("distances_128", move |b| {
        b.iter(|| pathing::Distances::new(&walls, CellCoordinate::new(0, 0)).unwrap())
    });
}

fn bench_solution_128(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(128);
    let walls = generators::generate_maze(RowsCount(128), ColumnsCount(128), &mut rng).unwrap();

    c.bench_function("solution_128", move |b| {
        b.iter(|| pathing::solution(&walls).unwrap())
    });
}

criterion_group!(benches, bench_distances_128, bench_solution_128);
criterion_main!(benches);
