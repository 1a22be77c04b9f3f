//! Decision cost against sample-grid resolution.
//!
//! Cost grows linearly with the number of samples; the rule fold is constant.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pendulum_fuzzy::{Fuzzifier, FuzzyEngine, InputVector, RuleBase, SampleGrid};

fn bench_decide_by_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("decide");
    let input = InputVector::new(100.0, 30.0);
    for step in [0.5, 0.1, 0.05, 0.01] {
        let grid = SampleGrid::new(-100.0, 100.0, step).expect("valid grid");
        let engine = FuzzyEngine::with_grid(grid);
        group.bench_with_input(BenchmarkId::from_parameter(step), &input, |b, input| {
            b.iter(|| engine.decide(black_box(input)))
        });
    }
    group.finish();
}

fn bench_rule_fold(c: &mut Criterion) {
    let fuzzifier = Fuzzifier::standard();
    let rules = RuleBase::standard();
    let inputs = fuzzifier.fuzzify(&InputVector::new(75.0, 40.0));
    c.bench_function("rule_fold", |b| b.iter(|| rules.evaluate(black_box(&inputs))));
}

criterion_group!(benches, bench_decide_by_step, bench_rule_fold);
criterion_main!(benches);
