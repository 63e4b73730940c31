//! Core types for coin selection
//!
//! This module defines the fundamental types used by the coin selection
//! engine: the coin itself, the selection request, and the transaction plan
//! returned on success.
//!
//! # Key Types
//!
//! - [`UnspentOutput`]: Represents a single unspent transaction output
//! - [`ScriptType`]: The locking-script family of an output
//! - [`CoinSelectionInputs`]: A selection request
//! - [`SpendableUnspentOutputs`]: The resulting transaction plan
//!
//! # Amount Semantics
//!
//! All amounts are unsigned integers in the smallest currency unit
//! (satoshis), carried as `u128` so that accumulation over large coin sets
//! cannot overflow. Fee-per-byte products are computed in fixed-point decimal
//! by the fee calculator and only enter these types after being rounded up to
//! a whole unit.

use bitcoin::OutPoint;
use serde::{Deserialize, Serialize};

/// Locking-script family of a transaction output.
///
/// The variants are matched exhaustively inside the fee calculator, so adding
/// a script type forces every byte-cost table to account for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScriptType {
    /// Legacy pay-to-pubkey-hash
    P2pkh,
    /// Segwit v0 pay-to-witness-pubkey-hash
    P2wpkh,
}

/// Unspent transaction output (UTXO) representation
///
/// An unspent output from a previous transaction that can be used as an
/// input in a new transaction. Sourced from the wallet's UTXO set and never
/// mutated by the selection engine.
///
/// # Fields
///
/// * `outpoint` - Reference to the transaction output (txid and vout)
/// * `magnitude` - Amount locked in this output, in the smallest unit
/// * `script_type` - Locking-script family of this output
/// * `confirmations` - Number of confirmations (0 for unconfirmed)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnspentOutput {
    /// Reference to the transaction output (txid and vout)
    pub outpoint: OutPoint,

    /// Amount locked in this output, in the smallest unit
    pub magnitude: u128,

    /// Locking-script family of this output
    pub script_type: ScriptType,

    /// Number of confirmations (0 for unconfirmed)
    pub confirmations: u32,
}

impl UnspentOutput {
    /// Create a new unspent output
    ///
    /// # Arguments
    /// * `outpoint` - The transaction outpoint (txid and vout)
    /// * `magnitude` - The amount in this output, in the smallest unit
    /// * `script_type` - The locking-script family of this output
    pub fn new(outpoint: OutPoint, magnitude: u128, script_type: ScriptType) -> Self {
        Self {
            outpoint,
            magnitude,
            script_type,
            confirmations: 0,
        }
    }

    /// Set the confirmation count for this output
    pub fn with_confirmations(mut self, confirmations: u32) -> Self {
        self.confirmations = confirmations;
        self
    }

    /// Check if this output is confirmed
    pub fn is_confirmed(&self) -> bool {
        self.confirmations > 0
    }

    /// Get a unique identifier for this output
    pub fn id(&self) -> String {
        format!("{}:{}", self.outpoint.txid, self.outpoint.vout)
    }
}

/// The payment the caller wants to make: amount and destination script type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionTarget {
    /// Payment amount in the smallest unit
    pub value: u128,
    /// Script type of the payment destination
    pub script_type: ScriptType,
}

impl TransactionTarget {
    /// Create a new transaction target
    pub fn new(value: u128, script_type: ScriptType) -> Self {
        Self { value, script_type }
    }
}

/// Ordering policy applied to the candidate coin set before greedy selection
///
/// Each strategy trades absolute fee against wallet hygiene:
///
/// - `AscentDraw` spends the smallest coins first, consolidating wallet dust
///   at the cost of more inputs and a higher fee.
/// - `DescentDraw` spends the largest coins first, minimizing inputs and fee
///   but leaving small coins unconsolidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoinSortStrategy {
    /// Smallest magnitude first
    AscentDraw,
    /// Largest magnitude first
    DescentDraw,
}

/// A coin selection request
///
/// # Fields
///
/// * `target` - The desired payment amount and destination script type
/// * `fee_per_byte` - Fee rate in smallest units per byte
/// * `unspent_outputs` - Candidate coin set to choose from
/// * `sorting_strategy` - Ordering policy applied before selection
/// * `change_output_type` - Script type used if a change output is created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinSelectionInputs {
    /// The desired payment amount and destination script type
    pub target: TransactionTarget,

    /// Fee rate in smallest units per byte
    pub fee_per_byte: u64,

    /// Candidate coin set to choose from
    pub unspent_outputs: Vec<UnspentOutput>,

    /// Ordering policy applied before selection
    pub sorting_strategy: CoinSortStrategy,

    /// Script type used if a change output is created
    pub change_output_type: ScriptType,
}

impl CoinSelectionInputs {
    /// Create a new selection request
    pub fn new(
        target: TransactionTarget,
        fee_per_byte: u64,
        unspent_outputs: Vec<UnspentOutput>,
        sorting_strategy: CoinSortStrategy,
        change_output_type: ScriptType,
    ) -> Self {
        Self {
            target,
            fee_per_byte,
            unspent_outputs,
            sorting_strategy,
            change_output_type,
        }
    }
}

/// The transaction plan produced by a successful selection
///
/// Invariant: `absolute_fee + amount + change` equals the sum of the
/// magnitudes of `spendable_outputs`. When change is discarded as dust the
/// identity still holds because `absolute_fee` absorbs the remainder.
///
/// # Fields
///
/// * `spendable_outputs` - The ordered subset of coins chosen as inputs
/// * `absolute_fee` - Total fee to be paid, rounded up to a whole unit
/// * `amount` - The target payment amount (echoed from the request)
/// * `change` - Leftover returned to the wallet; zero if discarded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendableUnspentOutputs {
    /// The ordered subset of coins chosen as inputs
    pub spendable_outputs: Vec<UnspentOutput>,

    /// Total fee to be paid, in the smallest unit
    pub absolute_fee: u128,

    /// The target payment amount
    pub amount: u128,

    /// Leftover amount returned to the wallet; zero if discarded
    pub change: u128,
}

impl SpendableUnspentOutputs {
    /// An empty plan: no inputs, zero fee, zero amount, zero change.
    ///
    /// Returned by the sweep path when no coin is worth spending.
    pub fn empty() -> Self {
        Self {
            spendable_outputs: Vec::new(),
            absolute_fee: 0,
            amount: 0,
            change: 0,
        }
    }

    /// Total value of the selected inputs
    pub fn total_input_value(&self) -> u128 {
        total_value(&self.spendable_outputs)
    }
}

/// Calculate the total value of a set of coins
///
/// # Arguments
/// * `coins` - Coins to calculate total value for
///
/// # Returns
/// * Total value in the smallest unit
pub fn total_value(coins: &[UnspentOutput]) -> u128 {
    coins.iter().map(|coin| coin.magnitude).sum()
}
