use criterion::{Criterion, black_box, criterion_group, criterion_main};
use starhull_grid::{GridPoint, SparseGrid};

/// A hollow 20x20x20 shell: 2,168 populated cells in an 8,000-cell box.
fn shell_grid() -> SparseGrid<u32> {
    let mut grid = SparseGrid::new();
    for x in 0..20 {
        for y in 0..20 {
            for z in 0..20 {
                let on_surface =
                    x == 0 || x == 19 || y == 0 || y == 19 || z == 0 || z == 19;
                if on_surface {
                    grid.insert(GridPoint::new(x, y, z), 1);
                }
            }
        }
    }
    grid
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("grid_insert_1000", |bencher| {
        bencher.iter(|| {
            let mut grid = SparseGrid::new();
            for i in 0..1000 {
                grid.insert(black_box(GridPoint::new(i, -i, i * 2)), i);
            }
            black_box(grid)
        })
    });
}

fn bench_get(c: &mut Criterion) {
    let grid = shell_grid();
    c.bench_function("grid_get", |bencher| {
        bencher.iter(|| black_box(grid.get(black_box(GridPoint::new(0, 10, 10)))))
    });
}

fn bench_bounds(c: &mut Criterion) {
    let grid = shell_grid();
    c.bench_function("grid_bounds", |bencher| bencher.iter(|| black_box(grid.bounds())));
}

fn bench_cube_scan(c: &mut Criterion) {
    let grid = shell_grid();
    c.bench_function("grid_cube_scan", |bencher| {
        bencher.iter(|| black_box(grid.cube_scan().count()))
    });
}

fn bench_populated_scan(c: &mut Criterion) {
    let grid = shell_grid();
    c.bench_function("grid_populated_scan", |bencher| {
        bencher.iter(|| black_box(grid.populated_scan().count()))
    });
}

criterion_group!(
    benches,
    bench_insert,
    bench_get,
    bench_bounds,
    bench_cube_scan,
    bench_populated_scan
);
criterion_main!(benches);
