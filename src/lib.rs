//! Coin Selection Library
//!
//! This crate implements the coin-selection / transaction-construction engine
//! used to build on-chain Bitcoin-family (UTXO-based) transactions: choosing
//! a subset of unspent outputs that satisfies a target payment amount while
//! minimizing fees, handling change, and respecting dust thresholds.
//!
//! # Modules
//!
//! - `types`: Core domain types (coins, requests, transaction plans)
//! - `error`: Typed selection failures
//! - `fees`: Transaction size, fee, and dust threshold calculation
//! - `sorting`: Ordering strategies for the candidate coin set
//! - `selector`: The greedy selection algorithm and the sweep-all path
//! - `logging`: Optional `log`/`env_logger` initialization
//!
//! # Design
//!
//! The engine is a pure function of its inputs: no I/O, no shared mutable
//! state, no persistence. Amount math uses unsigned 128-bit integers;
//! fee-per-byte products use fixed-point decimals rounded up to whole units,
//! never IEEE floats. All failures are returned as values through
//! `Result` so call sites must handle every case exhaustively.
//!
//! Collaborators that supply candidate coins, fee rates, and consume the
//! resulting plan (signer, broadcaster) live outside this crate.

/// Core domain types for coin selection
pub mod types;

/// Typed selection failures
pub mod error;

/// Transaction size, fee, and dust threshold calculation
pub mod fees;

/// Ordering strategies for the candidate coin set
pub mod sorting;

/// The greedy selection algorithm and the sweep-all path
pub mod selector;

/// Logging initialization
pub mod logging;

/// Re-export core types for convenience
pub use types::{
    total_value, CoinSelectionInputs, CoinSortStrategy, ScriptType, SpendableUnspentOutputs,
    TransactionTarget, UnspentOutput,
};

/// Re-export the error type
pub use error::CoinSelectionError;

/// Re-export the fee calculator
pub use fees::{TransactionSizeCalculator, TransactionSizing};

/// Re-export the selector
pub use selector::CoinSelector;

/// Re-export sorting strategies
pub use sorting::{AscentDrawSorting, DescentDrawSorting, SortingStrategy};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization
///
/// Installs the default logging configuration. Optional: hosting
/// applications with their own logger can skip this. Safe to call multiple
/// times.
///
/// # Returns
/// * Result with () on success, or an error message string
pub fn init() -> Result<(), String> {
    logging::init(&logging::LogConfig::default())
}
