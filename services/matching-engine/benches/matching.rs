//! Benchmarks for order placement against a seeded book

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use matching_engine::MatchingEngine;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;
use types::config::MarketConfig;
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};

fn seeded_engine() -> MatchingEngine {
    let config = MarketConfig::new(10_000, 4_000, Price::new(Decimal::new(25, 2))).with_seed_depth(50);
    MatchingEngine::new(&config).expect("valid config")
}

fn random_order(rng: &mut ChaCha8Rng, ts: i64) -> Order {
    let side = if rng.gen_bool(0.5) { Side::BUY } else { Side::SELL };
    let size = Quantity::new(Decimal::new(rng.gen_range(1..500), 2));
    if rng.gen_bool(0.3) {
        Order::market(side, size, ts)
    } else {
        // 0.2300 ..= 0.2700
        let price = Price::new(Decimal::new(rng.gen_range(2300..=2700), 4));
        Order::limit(side, price, size, ts)
    }
}

fn benchmark_place_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("place");
    let mut engine = seeded_engine();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut ts = 0i64;

    group.throughput(Throughput::Elements(1));
    group.bench_function("mixed_order", |b| {
        b.iter(|| {
            ts += 1;
            let order = random_order(&mut rng, ts);
            let _ = black_box(engine.place(order));
        });
    });

    group.finish();
}

fn benchmark_place_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("place_batch");

    for size in [100usize, 1_000, 10_000] {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let orders: Vec<Order> = (0..size).map(|i| random_order(&mut rng, i as i64)).collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("orders_{size}"), |b| {
            b.iter_batched(
                || (seeded_engine(), orders.clone()),
                |(mut engine, orders)| {
                    for order in orders {
                        let _ = black_box(engine.place(order));
                    }
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn benchmark_seed(c: &mut Criterion) {
    c.bench_function("seed_50_levels", |b| b.iter(|| black_box(seeded_engine())));
}

criterion_group!(benches, benchmark_place_single, benchmark_place_batch, benchmark_seed);
criterion_main!(benches);
