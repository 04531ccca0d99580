use criterion::{Criterion, criterion_group, criterion_main};


fn benches(c: &mut Criterion) {
    settlement_bench::register_benchmarks(c);
}

criterion_group!(all, benches);
criterion_main!(all);
