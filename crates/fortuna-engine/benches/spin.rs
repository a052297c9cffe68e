//! Spin throughput benchmark

use criterion::{criterion_group, criterion_main, Criterion};

use fortuna_engine::{GameConfig, GameEngine};

fn bench_full_round(c: &mut Criterion) {
    c.bench_function("full_round_3_lines", |b| {
        let mut engine = GameEngine::seeded(GameConfig::standard(), 42).unwrap();
        engine.deposit(1_000).unwrap();

        b.iter(|| {
            // Top-up covers the worst case so the balance never runs dry.
            engine.deposit(10).unwrap();
            engine.place_bet(&[1, 2, 3], &[1, 1, 1]).unwrap();
            engine.spin().unwrap()
        });
    });
}

criterion_group!(benches, bench_full_round);
criterion_main!(benches);
