//! Benchmarks for BSP dungeon generation.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dungeonforge_bsp::{GenOptions, Map};
use dungeonforge_random::Rng;

fn bench_dungeon_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("bsp_dungeon_size");
    let options = GenOptions::default();

    for (width, height) in [(40, 25), (60, 40), (80, 50), (100, 60), (120, 80)] {
        let mut rng = Rng::new();

        group.bench_with_input(
            BenchmarkId::new("generate", format!("{width}x{height}")),
            &(width, height),
            |b, &(w, h)| {
                b.iter(|| {
                    let map = Map::new(black_box(w), black_box(h), black_box(&options), &mut rng).unwrap();
                    map.rooms().len()
                });
            },
        );
    }

    group.finish();
}

fn bench_dungeon_room_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("bsp_room_sizes");
    let width = 100;
    let height = 70;

    group.bench_function("small_rooms", |b| {
        let options = GenOptions::new().with_min_room_size(4).with_max_room_size(8);
        let mut rng = Rng::new();

        b.iter(|| {
            let map = Map::new(black_box(width), black_box(height), black_box(&options), &mut rng).unwrap();
            map.rooms().len()
        });
    });

    group.bench_function("medium_rooms", |b| {
        let options = GenOptions::default();
        let mut rng = Rng::new();

        b.iter(|| {
            let map = Map::new(black_box(width), black_box(height), black_box(&options), &mut rng).unwrap();
            map.rooms().len()
        });
    });

    group.bench_function("large_rooms", |b| {
        let options = GenOptions::new().with_min_room_size(12).with_max_room_size(24);
        let mut rng = Rng::new();

        b.iter(|| {
            let map = Map::new(black_box(width), black_box(height), black_box(&options), &mut rng).unwrap();
            map.rooms().len()
        });
    });

    group.finish();
}

fn bench_dungeon_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("bsp_dungeon_access");
    let options = GenOptions::default();
    let mut rng = Rng::new();
    let map = Map::new(100, 70, &options, &mut rng).unwrap();

    group.bench_function("get_100_cells", |b| {
        b.iter(|| {
            let mut ground_count = 0;
            for y in 0..10 {
                for x in 0..10 {
                    let label = map.tiles().get(black_box(x * 8), black_box(y * 5));
                    if label.id() == 1 {
                        ground_count += 1;
                    }
                }
            }
            ground_count
        });
    });

    group.bench_function("iterate_all_tiles", |b| {
        b.iter(|| map.tiles().iter().filter(|(_, label)| label.id() == 1).count());
    });

    group.finish();
}

criterion_group!(benches, bench_dungeon_size, bench_dungeon_room_sizes, bench_dungeon_access);
criterion_main!(benches);
