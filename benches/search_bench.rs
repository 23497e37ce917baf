use criterion::{criterion_group, criterion_main, Criterion};
use grid_astar::{find_path, Grid};
use grid_util::Point;
use rand::prelude::*;
use std::hint::black_box;

fn random_grid(n: usize, density: f64, rng: &mut StdRng) -> Grid {
    let mut grid = Grid::create(n, n).unwrap();
    grid.set_start(Point::new(0, 0)).unwrap();
    grid.set_end(Point::new(n as i32 - 1, n as i32 - 1)).unwrap();
    let walls = (0..n as i32)
        .flat_map(|y| (0..n as i32).map(move |x| Point::new(x, y)))
        .filter(|_| rng.gen_bool(density))
        .collect::<Vec<_>>();
    grid.set_walls(walls).unwrap();
    grid.compute_heuristic_all().unwrap();
    grid
}

fn search_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for (n, density) in [(16, 0.0), (16, 0.25), (32, 0.0), (32, 0.25)] {
        let mut grid = random_grid(n, density, &mut rng);
        c.bench_function(format!("{n}x{n}, wall density {density}").as_str(), |b| {
            b.iter(|| black_box(find_path(&mut grid)))
        });
    }
}

criterion_group!(benches, search_bench);
criterion_main!(benches);
