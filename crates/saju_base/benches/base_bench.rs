use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_base::{Branch, Ganji, Stem};

fn bench_from_cycle(c: &mut Criterion) {
    c.bench_function("ganji_from_cycle", |b| {
        b.iter(|| {
            for i in -120i64..120 {
                black_box(Ganji::from_cycle(black_box(i)));
            }
        })
    });
}

fn bench_from_pair(c: &mut Criterion) {
    c.bench_function("ganji_from_pair", |b| {
        b.iter(|| black_box(Ganji::from_pair(black_box(Stem::Gye), black_box(Branch::Mi))))
    });
}

criterion_group!(benches, bench_from_cycle, bench_from_pair);
criterion_main!(benches);
