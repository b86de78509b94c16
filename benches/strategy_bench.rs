//! Criterion benchmarks for every strategy on the default ODU catalog.
//!
//! Scenarios come from the generator with a fixed seed, so each strategy
//! sees the same demand on every iteration.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use odu_assign::eval::Evaluator;
use odu_assign::generator::ScenarioGenerator;
use odu_assign::model::{Catalog, Scenario};
use odu_assign::random::create_rng;
use odu_assign::strategy::{StrategiesConfig, StrategyKind};

fn scenarios(catalog: &Catalog) -> Vec<Scenario> {
    let generator = ScenarioGenerator::new(catalog, 1000.0).expect("valid ceiling");
    generator.generate_many(4, &mut create_rng(42))
}

fn bench_strategies(c: &mut Criterion) {
    let catalog = Catalog::odu_default();
    let scenarios = scenarios(&catalog);
    let mut group = c.benchmark_group("strategy");
    group.sample_size(10);

    for strategy in StrategiesConfig::default().build() {
        let kind = strategy.kind();
        group.bench_with_input(
            BenchmarkId::from_parameter(kind.name()),
            &scenarios,
            |b, scenarios| {
                b.iter(|| {
                    for (i, scenario) in scenarios.iter().enumerate() {
                        let mut rng = create_rng(i as u64);
                        let result = strategy.solve(black_box(&catalog), black_box(scenario), &mut rng);
                        black_box(result).ok();
                    }
                })
            },
        );
    }
    group.finish();
}

fn bench_evaluator(c: &mut Criterion) {
    let catalog = Catalog::odu_default();
    let scenario = Scenario::new()
        .with("ODU0", 40)
        .with("ODU2", 30)
        .with("ODU4", 4)
        .with("ODUC4", 1);
    let evaluator = Evaluator::new(&catalog, &scenario);

    c.bench_function("evaluate", |b| {
        b.iter(|| black_box(evaluator.evaluate(black_box(&[0, 1, 0, 1]))))
    });
}

fn bench_ilp_scaling(c: &mut Criterion) {
    let catalog = Catalog::odu_default();
    let mut group = c.benchmark_group("ilp_scaling");
    group.sample_size(10);
    let ilp = StrategiesConfig::default()
        .with_enabled([StrategyKind::Ilp])
        .build();

    for &n in &[2u32, 8, 32] {
        let scenario = Scenario::new()
            .with("ODU0", n * 4)
            .with("ODU2", n)
            .with("ODU4", n / 2)
            .with("ODUC4", 1);
        group.bench_with_input(BenchmarkId::from_parameter(n), &scenario, |b, s| {
            b.iter(|| {
                for strategy in &ilp {
                    black_box(strategy.solve(&catalog, s, &mut create_rng(0))).ok();
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_strategies, bench_evaluator, bench_ilp_scaling);
criterion_main!(benches);
