use criterion::{BatchSize, Criterion, criterion_group, criterion_main};

use lifeplan::config::PlanConfig;
use lifeplan::simulation::Simulation;
use lifeplan::types::Year;

fn bench_canonical_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection");

    group.bench_function("canonical_2016_2055", |b| {
        b.iter_batched(
            || Simulation::from_config(PlanConfig::canonical()),
            |mut sim| sim.run(),
            BatchSize::SmallInput,
        )
    });

    // Same plan pushed out a few centuries — stresses the open-ended
    // child projects and the powi-based inflation path.
    group.bench_function("long_horizon_2016_2500", |b| {
        b.iter_batched(
            || Simulation::from_config(PlanConfig::canonical()).until(Year(2500)),
            |mut sim| sim.run(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_canonical_projection);
criterion_main!(benches);
