use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cyclebench_dsa::InputSet;
use cyclebench_validate::ValidationStrategy;

fn bench_validation_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("envelope_validation");

    for set in InputSet::ALL {
        let inputs = set.envelopes();
        let strategies = std::iter::once(ValidationStrategy::NoCheck).chain(ValidationStrategy::ALL);

        for strategy in strategies {
            let kernel = strategy.kernel();
            group.bench_with_input(
                BenchmarkId::new(strategy.name(), set.title()),
                inputs,
                |b, inputs| b.iter(|| black_box(kernel(black_box(inputs)))),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_validation_shapes);
criterion_main!(benches);
