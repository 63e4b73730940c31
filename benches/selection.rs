use bitcoin::{OutPoint, Txid};
use coin_selection::{
    CoinSelectionInputs, CoinSelector, CoinSortStrategy, ScriptType, TransactionTarget,
    UnspentOutput,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::str::FromStr;

fn coin_set(count: u32) -> Vec<UnspentOutput> {
    let txid =
        Txid::from_str("7967a5185e907a25225574544c31f7b059c1a191d65b53dcc1554d339c4f9efc").unwrap();
    (0..count)
        .map(|i| {
            let script_type = if i % 2 == 0 {
                ScriptType::P2wpkh
            } else {
                ScriptType::P2pkh
            };
            UnspentOutput::new(
                OutPoint::new(txid, i),
                1_000 + (i as u128 * 7_919) % 500_000,
                script_type,
            )
        })
        .collect()
}

fn benchmark_ascent_draw_selection(c: &mut Criterion) {
    let selector = CoinSelector::new();
    let inputs = CoinSelectionInputs::new(
        TransactionTarget::new(10_000_000, ScriptType::P2wpkh),
        25,
        coin_set(1_000),
        CoinSortStrategy::AscentDraw,
        ScriptType::P2wpkh,
    );

    c.bench_function("select_ascent_draw_1000_coins", |b| {
        b.iter(|| selector.select(black_box(&inputs)))
    });
}

fn benchmark_descent_draw_selection(c: &mut Criterion) {
    let selector = CoinSelector::new();
    let inputs = CoinSelectionInputs::new(
        TransactionTarget::new(10_000_000, ScriptType::P2wpkh),
        25,
        coin_set(1_000),
        CoinSortStrategy::DescentDraw,
        ScriptType::P2wpkh,
    );

    c.bench_function("select_descent_draw_1000_coins", |b| {
        b.iter(|| selector.select(black_box(&inputs)))
    });
}

fn benchmark_select_all(c: &mut Criterion) {
    let selector = CoinSelector::new();
    let coins = coin_set(1_000);

    c.bench_function("select_all_1000_coins", |b| {
        b.iter(|| selector.select_all(black_box(&coins), 25, ScriptType::P2wpkh))
    });
}

criterion_group!(
    benches,
    benchmark_ascent_draw_selection,
    benchmark_descent_draw_selection,
    benchmark_select_all
);
criterion_main!(benches);
