//! Error types for the coin selection engine
//!
//! All failures are deterministic validation outcomes, detected locally and
//! returned synchronously. None are retryable by the engine itself: callers
//! may re-invoke with different parameters (lower amount, different fee tier,
//! or after additional funds arrive), but there is no partial-success mode.

use thiserror::Error;

/// Terminal failure of a coin selection request
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoinSelectionError {
    /// The candidate coin set was empty at call time
    #[error("no coins available to select from")]
    NoCoinsToSelect,

    /// Every candidate coin costs more to spend than it is worth at the
    /// given fee rate
    #[error("no coins are economically worth spending at this fee rate")]
    NoEffectiveCoins,

    /// The greedy loop chose nothing (the base fee alone can disqualify all
    /// effective coins in combination with the stopping condition)
    #[error("selection produced no coins")]
    NoSelectedCoins,

    /// Total available value (after fees) is less than the requested payment
    #[error("insufficient funds: {available} available, {required} required")]
    InsufficientFunds {
        /// Accumulated value of every coin worth spending
        available: u128,
        /// Target amount plus the accumulated fee
        required: u128,
    },
}
