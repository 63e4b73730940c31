//! Tests for the coin sorting strategies

use bitcoin::{OutPoint, Txid};
use coin_selection::sorting::{self, AscentDrawSorting, DescentDrawSorting, SortingStrategy};
use coin_selection::types::{CoinSortStrategy, ScriptType, UnspentOutput};
use std::str::FromStr;

fn coins(values: &[u128]) -> Vec<UnspentOutput> {
    let txid =
        Txid::from_str("3d7c1421a4732a250ee59ce08b2ae34b5de8d3242e266a81a3d09887b8ca2e7c").unwrap();
    values
        .iter()
        .enumerate()
        .map(|(i, value)| UnspentOutput::new(OutPoint::new(txid, i as u32), *value, ScriptType::P2pkh))
        .collect()
}

fn magnitudes(coins: &[UnspentOutput]) -> Vec<u128> {
    coins.iter().map(|coin| coin.magnitude).collect()
}

#[test]
fn ascent_draw_orders_smallest_first() {
    let sorted = AscentDrawSorting.sort(&coins(&[300, 1, 20_000, 7]));
    assert_eq!(magnitudes(&sorted), vec![1, 7, 300, 20_000]);
}

#[test]
fn descent_draw_orders_largest_first() {
    let sorted = DescentDrawSorting.sort(&coins(&[300, 1, 20_000, 7]));
    assert_eq!(magnitudes(&sorted), vec![20_000, 300, 7, 1]);
}

#[test]
fn sorting_does_not_mutate_the_source() {
    let original = coins(&[5, 3, 9]);
    let _ = AscentDrawSorting.sort(&original);
    let _ = DescentDrawSorting.sort(&original);
    assert_eq!(magnitudes(&original), vec![5, 3, 9]);
}

#[test]
fn sorting_handles_empty_and_single_sets() {
    assert!(AscentDrawSorting.sort(&[]).is_empty());
    let single = coins(&[42]);
    assert_eq!(magnitudes(&DescentDrawSorting.sort(&single)), vec![42]);
}

#[test]
fn strategy_dispatch_matches_implementations() {
    let set = coins(&[8, 2, 5]);
    assert_eq!(
        magnitudes(&sorting::sort_coins(CoinSortStrategy::AscentDraw, &set)),
        vec![2, 5, 8]
    );
    assert_eq!(
        magnitudes(&sorting::sort_coins(CoinSortStrategy::DescentDraw, &set)),
        vec![8, 5, 2]
    );
}

#[test]
fn coin_identity_is_outpoint_based() {
    let set = coins(&[42]);
    assert!(set[0].id().ends_with(":0"));
    assert!(!set[0].is_confirmed());
    assert!(set[0].clone().with_confirmations(1).is_confirmed());
}

#[test]
fn strategy_names() {
    assert_eq!(AscentDrawSorting.name(), "AscentDraw");
    assert_eq!(DescentDrawSorting.name(), "DescentDraw");
}
