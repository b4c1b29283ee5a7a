use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use verger::game::{RngSource, run_game};
use verger::policy::PolicyRegistry;
use verger::simulation::{GameConfig, run_batch};
use verger::trace::NullTrace;

fn bench_single_game(c: &mut Criterion) {
    let config = GameConfig::default();

    for name in ["random", "greedy"] {
        c.bench_function(&format!("run_game/{}", name), |b| {
            let mut rng = RngSource(StdRng::seed_from_u64(42));
            b.iter(|| {
                let mut policy = PolicyRegistry::global().create(name).unwrap();
                black_box(run_game(&config, policy.as_mut(), &mut rng, &mut NullTrace))
            })
        });
    }
}

fn bench_batch(c: &mut Criterion) {
    let config = GameConfig::default();

    c.bench_function("run_batch/greedy/1000", |b| {
        b.iter(|| black_box(run_batch(&config, "greedy", 1000, 42).unwrap()))
    });
}

criterion_group!(benches, bench_single_game, bench_batch);
criterion_main!(benches);
