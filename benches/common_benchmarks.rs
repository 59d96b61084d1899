use std::hint::black_box;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
type RandomState = hashbrown::DefaultHashBuilder;
type RingMap<K, V> = ring_map::ordered_map::OrderedMap<K, V, RandomState>;

type HashLinkedMap<K, V> = hashlink::LinkedHashMap<K, V, RandomState>;
type IndexMap<K, V> = indexmap::IndexMap<K, V, RandomState>;

const SIZES: &[usize] = &[10000];

fn filled_ring_map(size: usize) -> RingMap<usize, usize> {
    let mut map = RingMap::with_capacity_and_hasher(size, RandomState::default());
    for i in 0..size {
        map.set(i, i * 2);
    }
    map
}

fn filled_index_map(size: usize) -> IndexMap<usize, usize> {
    let mut map = IndexMap::with_capacity_and_hasher(size, RandomState::default());
    for i in 0..size {
        map.insert(i, i * 2);
    }
    map
}

fn filled_hashlinked(size: usize) -> HashLinkedMap<usize, usize> {
    let mut map = HashLinkedMap::default();
    for i in 0..size {
        map.insert(i, i * 2);
    }
    map
}

fn bench_insertion_at_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion_at_end");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("ring_map", size), &size, |b, &size| {
            b.iter(|| {
                let mut map: RingMap<usize, usize> = RingMap::default();
                for i in 0..size {
                    map.set(black_box(i), black_box(i * 2));
                }
                map
            })
        });

        group.bench_with_input(
            BenchmarkId::new("ring_map_preallocated", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    let mut map: RingMap<usize, usize> =
                        RingMap::with_capacity_and_hasher(size, RandomState::default());
                    for i in 0..size {
                        map.set(black_box(i), black_box(i * 2));
                    }
                    map
                })
            },
        );

        group.bench_with_input(BenchmarkId::new("indexmap", size), &size, |b, &size| {
            b.iter(|| {
                let mut map = IndexMap::default();
                for i in 0..size {
                    map.insert(black_box(i), black_box(i * 2));
                }
                map
            })
        });

        group.bench_with_input(BenchmarkId::new("hashlinked", size), &size, |b, &size| {
            b.iter(|| {
                let mut map = HashLinkedMap::default();
                for i in 0..size {
                    map.insert(black_box(i), black_box(i * 2));
                }
                map
            })
        });
    }

    group.finish();
}

fn bench_pop_from_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("pop_from_end");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("ring_map", size), &size, |b, &size| {
            b.iter_batched(
                || filled_ring_map(size),
                |mut map| {
                    let mut count = 0;
                    while map.pop_back().is_some() {
                        count += 1;
                    }
                    count
                },
                criterion::BatchSize::SmallInput,
            )
        });

        group.bench_with_input(
            BenchmarkId::new("ring_map_pop_at_head", size),
            &size,
            |b, &size| {
                b.iter_batched(
                    || filled_ring_map(size),
                    |mut map| {
                        let mut count = 0;
                        while map.delete_at(0) {
                            count += 1;
                        }
                        count
                    },
                    criterion::BatchSize::SmallInput,
                )
            },
        );

        group.bench_with_input(BenchmarkId::new("indexmap", size), &size, |b, &size| {
            b.iter_batched(
                || filled_index_map(size),
                |mut map| {
                    let mut count = 0;
                    while map.pop().is_some() {
                        count += 1;
                    }
                    count
                },
                criterion::BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("hashlinked", size), &size, |b, &size| {
            b.iter_batched(
                || filled_hashlinked(size),
                |mut map| {
                    let mut count = 0;
                    while map.pop_back().is_some() {
                        count += 1;
                    }
                    count
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_remove_from_middle(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_from_middle");

    for &size in SIZES {
        let mut next_down = size / 2;
        let mut next_up = size / 2 + 1;
        let mut middle_keys = Vec::with_capacity(size);
        for _ in 0..size / 2 {
            middle_keys.push(next_down);
            middle_keys.push(next_up);
            next_down = next_down.saturating_sub(1);
            if next_up < size - 1 {
                next_up += 1;
            }
        }

        group.throughput(criterion::Throughput::Elements(middle_keys.len() as u64));

        group.bench_with_input(BenchmarkId::new("ring_map", size), &size, |b, &size| {
            b.iter_batched(
                || filled_ring_map(size),
                |mut map| {
                    for key in &middle_keys {
                        map.delete(black_box(key));
                    }
                    map
                },
                criterion::BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("indexmap", size), &size, |b, &size| {
            b.iter_batched(
                || filled_index_map(size),
                |mut map| {
                    for key in &middle_keys {
                        map.shift_remove(black_box(key));
                    }
                    map
                },
                criterion::BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("hashlinked", size), &size, |b, &size| {
            b.iter_batched(
                || filled_hashlinked(size),
                |mut map| {
                    for key in &middle_keys {
                        map.remove(black_box(key));
                    }
                    map
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_move_to_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_to_front");

    for &size in SIZES {
        // Stride through the keys so every move touches a different region.
        let keys: Vec<usize> = (0..size).map(|i| (i * 7919) % size).collect();
        group.throughput(criterion::Throughput::Elements(keys.len() as u64));

        group.bench_with_input(BenchmarkId::new("ring_map", size), &size, |b, &size| {
            let mut map = filled_ring_map(size);
            b.iter(|| {
                for key in &keys {
                    map.to_head(black_box(key));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("indexmap", size), &size, |b, &size| {
            let mut map = filled_index_map(size);
            b.iter(|| {
                for key in &keys {
                    if let Some(index) = map.get_index_of(black_box(key)) {
                        map.move_index(index, 0);
                    }
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("hashlinked", size), &size, |b, &size| {
            let mut map = filled_hashlinked(size);
            b.iter(|| {
                for key in &keys {
                    map.to_front(black_box(key));
                }
            })
        });
    }

    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_access");

    for &size in SIZES {
        let keys: Vec<usize> = (0..size).map(|i| (i * 7919) % size).collect();
        group.throughput(criterion::Throughput::Elements(keys.len() as u64));

        group.bench_with_input(BenchmarkId::new("ring_map", size), &size, |b, &size| {
            let map = filled_ring_map(size);
            b.iter(|| {
                let mut sum = 0;
                for key in &keys {
                    sum += map.get(black_box(key)).copied().unwrap_or_default();
                }
                sum
            })
        });

        group.bench_with_input(BenchmarkId::new("indexmap", size), &size, |b, &size| {
            let map = filled_index_map(size);
            b.iter(|| {
                let mut sum = 0;
                for key in &keys {
                    sum += map.get(black_box(key)).copied().unwrap_or_default();
                }
                sum
            })
        });

        group.bench_with_input(BenchmarkId::new("hashlinked", size), &size, |b, &size| {
            let map = filled_hashlinked(size);
            b.iter(|| {
                let mut sum = 0;
                for key in &keys {
                    sum += map.get(black_box(key)).copied().unwrap_or_default();
                }
                sum
            })
        });
    }

    group.finish();
}

fn bench_positional_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("positional_access");

    // Positional lookups walk the list, so keep this one small.
    for &size in &[100usize, 1000] {
        let indices: Vec<isize> = (0..size as isize).map(|i| i - size as isize / 2).collect();
        group.throughput(criterion::Throughput::Elements(indices.len() as u64));

        group.bench_with_input(BenchmarkId::new("ring_map", size), &size, |b, &size| {
            let map = filled_ring_map(size);
            b.iter(|| {
                let mut sum = 0;
                for &index in &indices {
                    sum += map.get_at(black_box(index)).map_or(0, |(_, v)| *v);
                }
                sum
            })
        });

        group.bench_with_input(BenchmarkId::new("indexmap", size), &size, |b, &size| {
            let map = filled_index_map(size);
            b.iter(|| {
                let mut sum = 0;
                for &index in &indices {
                    let index = black_box(index).rem_euclid(map.len() as isize) as usize;
                    sum += map.get_index(index).map_or(0, |(_, v)| *v);
                }
                sum
            })
        });
    }

    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("ring_map", size), &size, |b, &size| {
            let mut map = filled_ring_map(size);
            // Shuffle the list order away from the arena order.
            for i in (0..size).step_by(3) {
                map.to_head(&i);
            }
            b.iter(|| map.iter().map(|(_, v)| *v).sum::<usize>())
        });

        group.bench_with_input(BenchmarkId::new("indexmap", size), &size, |b, &size| {
            let map = filled_index_map(size);
            b.iter(|| map.iter().map(|(_, v)| *v).sum::<usize>())
        });

        group.bench_with_input(BenchmarkId::new("hashlinked", size), &size, |b, &size| {
            let map = filled_hashlinked(size);
            b.iter(|| map.iter().map(|(_, v)| *v).sum::<usize>())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insertion_at_end,
    bench_pop_from_end,
    bench_remove_from_middle,
    bench_move_to_front,
    bench_random_access,
    bench_positional_access,
    bench_iteration,
);
criterion_main!(benches);
