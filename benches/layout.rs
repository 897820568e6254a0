use criterion::{criterion_group, criterion_main, Criterion};
use maze_layout::{
    generators,
    layout::{self, MazeLayout},
    units::{CellHeight, CellWidth, ColumnsCount, RowsCount, WallThickness},
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn bench_wall_segments_64(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(64);
    let walls = generators::generate_maze(RowsCount(64), ColumnsCount(64), &mut rng).unwrap();
    let options = layout::LayoutOptions::new(CellWidth(10.0), CellHeight(10.0), WallThickness(1.0)).unwrap();

    c.bench_function("wall_segments_64", move |b| {
        b.iter(|| layout::wall_segments(&walls, &options))
    });
}

fn bench_layout_json_64(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(64);
    let walls = generators::generate_maze(RowsCount(64), ColumnsCount(64), &mut rng).unwrap();
    let options = layout::LayoutOptions::new(CellWidth(10.0), CellHeight(10.0), WallThickness(1.0)).unwrap();

    c.bench_function("layout_json_64", move |b| {
        b.iter(|| MazeLayout::new(&walls, options).to_json().unwrap())
    });
}

criterion_group!(benches, bench_wall_segments_64, bench_layout_json_64);
criterion_main!(benches);
