use criterion::{black_box, criterion_group, criterion_main, Criterion};
use list_vs_set::*;

fn criterion_benchmark(c: &mut Criterion) {
    for n in [1_000u64, 100_000] {
        let data: Vec<u64> = (0..n).collect();
        let set: FxHashSet<u64> = data.iter().copied().collect();
        let frozen = FrozenSet::from(data.as_slice());
        let target = n / 2;
        let non_target = n + 1;

        let mut group = c.benchmark_group(format!("contains {n}"));
        group.bench_function("vec", |b| {
            b.iter(|| data.contains(black_box(&target)) && !data.contains(black_box(&non_target)))
        });
        group.bench_function("set", |b| {
            b.iter(|| set.contains(black_box(&target)) && !set.contains(black_box(&non_target)))
        });
        group.bench_function("frozen", |b| {
            b.iter(|| {
                frozen.contains(black_box(&target)) && !frozen.contains(black_box(&non_target))
            })
        });
        group.finish();
    }

    let data: Vec<u64> = (0..100_000).collect();
    let mut build = c.benchmark_group("build 100000");
    build.bench_function("set", |b| {
        b.iter(|| black_box(&data).iter().copied().collect::<FxHashSet<u64>>())
    });
    build.bench_function("frozen", |b| {
        b.iter(|| FrozenSet::from(black_box(data.as_slice())))
    });
    build.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
