//! Coin sorting strategies
//!
//! This module defines the ordering policies applied to a candidate coin set
//! before greedy selection. Each policy implements the [`SortingStrategy`]
//! trait and imposes a total order by `magnitude` only; stability with
//! respect to equal-valued coins is not guaranteed.

use crate::types::{CoinSortStrategy, UnspentOutput};

pub mod ascent_draw;
pub mod descent_draw;

// Re-export implementations
pub use ascent_draw::AscentDrawSorting;
pub use descent_draw::DescentDrawSorting;

/// Trait defining a coin sorting strategy
///
/// Any struct implementing this trait can be used to order the candidate
/// coin set. Implementations must be pure: same input, same output, no
/// mutation of the source slice.
pub trait SortingStrategy {
    /// Name of this strategy
    fn name(&self) -> &'static str;

    /// Return a new list containing the given coins in this strategy's order
    fn sort(&self, coins: &[UnspentOutput]) -> Vec<UnspentOutput>;
}

/// Sort coins according to the given strategy selector.
///
/// # Arguments
/// * `strategy` - Which ordering policy to apply
/// * `coins` - Coins to order
///
/// # Returns
/// * A new ordered vector of coins
pub fn sort_coins(strategy: CoinSortStrategy, coins: &[UnspentOutput]) -> Vec<UnspentOutput> {
    match strategy {
        CoinSortStrategy::AscentDraw => AscentDrawSorting.sort(coins),
        CoinSortStrategy::DescentDraw => DescentDrawSorting.sort(coins),
    }
}
