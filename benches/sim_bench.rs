use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mmc_sim::models::QueueConfig;
use mmc_sim::sim::run_simulation;

fn build_config(servers: u32, horizon: f64) -> QueueConfig {
    QueueConfig {
        arrival_rate: servers as f64 * 0.75,
        service_rate: 1.0,
        servers,
        horizon,
        max_states: 20,
        time_scale: 60.0,
        seed: Some(42),
    }
}

fn bench_simulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");
    for servers in [1u32, 4, 16] {
        let label = format!("{}x1000", servers);
        group.bench_with_input(BenchmarkId::from_parameter(label), &servers, |b, &servers| {
            let config = build_config(servers, 1000.0);
            b.iter(|| {
                let report = run_simulation(&config).expect("simulation should succeed");
                black_box(report);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_simulation);
criterion_main!(benches);
