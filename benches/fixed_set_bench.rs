use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fixedset::{FixedSet, FixedSetConfig, Key, KeyRng};
use rand::Rng;

fn generate_keys(count: usize, seed: u64) -> Vec<Key> {
    let mut rng = KeyRng::new(seed);
    (0..count).map(|_| rng.gen_range(-1_000_000_000..=1_000_000_000)).collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for &count in [1_000usize, 10_000, 100_000].iter() {
        let keys = generate_keys(count, 1);
        group.bench_with_input(BenchmarkId::new("sequential", count), &keys, |b, keys| {
            let config = FixedSetConfig::default().with_seed(7);
            b.iter(|| black_box(FixedSet::build_with_config(keys, &config).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("parallel", count), &keys, |b, keys| {
            let config = FixedSetConfig::default().with_seed(7).with_parallel(true);
            b.iter(|| black_box(FixedSet::build_with_config(keys, &config).unwrap()));
        });
    }
    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");

    for &count in [1_000usize, 100_000].iter() {
        let keys = generate_keys(count, 2);
        let probes = generate_keys(1_024, 3);
        let set = FixedSet::build_with_config(&keys, &FixedSetConfig::default().with_seed(7)).unwrap();

        group.bench_with_input(BenchmarkId::new("hit", count), &keys, |b, keys| {
            let mut i = 0;
            b.iter(|| {
                i = (i + 1) % keys.len();
                black_box(set.contains(keys[i]))
            });
        });
        group.bench_with_input(BenchmarkId::new("random", count), &probes, |b, probes| {
            let mut i = 0;
            b.iter(|| {
                i = (i + 1) % probes.len();
                black_box(set.contains(probes[i]))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_contains);
criterion_main!(benches);
