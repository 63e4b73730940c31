//! Coin selector implementation
//!
//! This module provides the [`CoinSelector`], the primary entry point of the
//! crate. It consumes a [`CoinSelectionInputs`] request, orders the candidate
//! coins with the requested sorting strategy, filters out coins that cost
//! more to spend than they are worth, then greedily accumulates inputs until
//! the target plus the running fee is covered.
//!
//! # Overview
//!
//! Selection is a pure computation: the selector holds no state beyond its
//! fee calculator, performs no I/O, and is safe to invoke concurrently. Every
//! failure is a deterministic validation outcome surfaced immediately as a
//! [`CoinSelectionError`]; there is no partial-success mode.
//!
//! # Usage
//!
//! ```
//! use bitcoin::OutPoint;
//! use coin_selection::selector::CoinSelector;
//! use coin_selection::types::{
//!     CoinSelectionInputs, CoinSortStrategy, ScriptType, TransactionTarget, UnspentOutput,
//! };
//!
//! let coins = vec![UnspentOutput::new(OutPoint::null(), 100_000, ScriptType::P2wpkh)];
//! let inputs = CoinSelectionInputs::new(
//!     TransactionTarget::new(50_000, ScriptType::P2wpkh),
//!     1,
//!     coins,
//!     CoinSortStrategy::AscentDraw,
//!     ScriptType::P2wpkh,
//! );
//!
//! let plan = CoinSelector::new().select(&inputs).unwrap();
//! assert_eq!(plan.amount, 50_000);
//! assert_eq!(
//!     plan.absolute_fee + plan.amount + plan.change,
//!     plan.total_input_value(),
//! );
//! ```

use crate::error::CoinSelectionError;
use crate::fees::{fee_rounded_up, TransactionSizeCalculator, TransactionSizing};
use crate::sorting;
use crate::types::{CoinSelectionInputs, ScriptType, SpendableUnspentOutputs, UnspentOutput};
use log::{debug, warn};

/// Coin selector that builds transaction plans from unspent outputs
///
/// Generic over the fee calculator so tests and alternative chain parameter
/// sets can substitute their own byte-cost tables; defaults to
/// [`TransactionSizeCalculator`].
pub struct CoinSelector<C = TransactionSizeCalculator> {
    /// Fee/size calculator used for all byte and dust math
    calculator: C,
}

impl CoinSelector {
    /// Create a new selector with the default fee calculator
    pub fn new() -> Self {
        Self {
            calculator: TransactionSizeCalculator::new(),
        }
    }
}

impl Default for CoinSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: TransactionSizing> CoinSelector<C> {
    /// Create a selector with a specific fee calculator
    pub fn with_calculator(calculator: C) -> Self {
        Self { calculator }
    }

    /// Produce a transaction plan for the given selection request.
    ///
    /// Orders the candidates with the requested sorting strategy, drops
    /// coins whose value does not exceed their own marginal spending cost,
    /// then accumulates inputs in order until the accumulated value covers
    /// the target plus the accumulated fee. The leftover is kept as a change
    /// output when it clears the dust threshold for the configured change
    /// type, and absorbed into the fee otherwise.
    ///
    /// # Arguments
    /// * `inputs` - The selection request
    ///
    /// # Returns
    /// * A transaction plan, or the first validation failure detected
    pub fn select(
        &self,
        inputs: &CoinSelectionInputs,
    ) -> Result<SpendableUnspentOutputs, CoinSelectionError> {
        let fee_per_byte = inputs.fee_per_byte;
        debug!(
            "selecting coins: target={} fee_per_byte={} candidates={} strategy={:?}",
            inputs.target.value,
            fee_per_byte,
            inputs.unspent_outputs.len(),
            inputs.sorting_strategy,
        );

        if inputs.unspent_outputs.is_empty() {
            warn!("coin selection failed: candidate set is empty");
            return Err(CoinSelectionError::NoCoinsToSelect);
        }

        let sorted = sorting::sort_coins(inputs.sorting_strategy, &inputs.unspent_outputs);
        let effective: Vec<UnspentOutput> = sorted
            .into_iter()
            .filter(|coin| self.calculator.is_effective(coin, fee_per_byte))
            .collect();
        if effective.is_empty() {
            warn!(
                "coin selection failed: no effective coins at {} per byte",
                fee_per_byte
            );
            return Err(CoinSelectionError::NoEffectiveCoins);
        }

        // Base fee covers a transaction with no inputs and only the target
        // output.
        let base_bytes = self
            .calculator
            .transaction_bytes(&[], &[inputs.target.script_type]);
        let mut accumulated_fee = fee_rounded_up(base_bytes, fee_per_byte);
        let mut accumulated_value: u128 = 0;
        let mut selected: Vec<UnspentOutput> = Vec::new();

        for coin in effective {
            if accumulated_value >= inputs.target.value + accumulated_fee {
                // Covered: the remaining coins are scanned but never added.
                continue;
            }
            accumulated_fee +=
                fee_rounded_up(self.calculator.input_bytes(coin.script_type), fee_per_byte);
            accumulated_value += coin.magnitude;
            selected.push(coin);
        }

        if selected.is_empty() {
            warn!("coin selection failed: nothing selected");
            return Err(CoinSelectionError::NoSelectedCoins);
        }

        let required = inputs.target.value + accumulated_fee;
        if accumulated_value < required {
            warn!(
                "coin selection failed: insufficient funds ({} < {})",
                accumulated_value, required
            );
            return Err(CoinSelectionError::InsufficientFunds {
                available: accumulated_value,
                required,
            });
        }

        let remaining_value = accumulated_value - required;
        let dust_threshold = self
            .calculator
            .dust_threshold(fee_per_byte, inputs.change_output_type);

        let (absolute_fee, change) = if remaining_value >= dust_threshold {
            // Worth keeping: the change output pays for its own marginal
            // bytes.
            let change_output_fee = fee_rounded_up(
                self.calculator.output_bytes(inputs.change_output_type),
                fee_per_byte,
            );
            (
                accumulated_fee + change_output_fee,
                remaining_value - change_output_fee,
            )
        } else {
            // Dust: the remainder is absorbed into the fee.
            (accumulated_fee + remaining_value, 0)
        };

        debug!(
            "selected {} coins: fee={} amount={} change={}",
            selected.len(),
            absolute_fee,
            inputs.target.value,
            change,
        );
        Ok(SpendableUnspentOutputs {
            spendable_outputs: selected,
            absolute_fee,
            amount: inputs.target.value,
            change,
        })
    }

    /// Produce a "sweep everything" plan: spend all effective coins into a
    /// single output of the given type.
    ///
    /// This path cannot fail. When no coin is worth spending at the given
    /// fee rate it returns an empty plan rather than an error, so callers
    /// can render a zero spendable balance.
    ///
    /// # Arguments
    /// * `coins` - The full candidate coin set
    /// * `fee_per_byte` - Fee rate in smallest units per byte
    /// * `single_output_type` - Script type of the single destination output
    ///
    /// # Returns
    /// * A plan spending every effective coin, with zero change
    pub fn select_all(
        &self,
        coins: &[UnspentOutput],
        fee_per_byte: u64,
        single_output_type: ScriptType,
    ) -> Result<SpendableUnspentOutputs, CoinSelectionError> {
        let effective: Vec<UnspentOutput> = coins
            .iter()
            .filter(|coin| self.calculator.is_effective(coin, fee_per_byte))
            .cloned()
            .collect();
        if effective.is_empty() {
            debug!("sweep: no effective coins at {} per byte", fee_per_byte);
            return Ok(SpendableUnspentOutputs::empty());
        }

        let balance =
            self.calculator
                .effective_balance(fee_per_byte, &effective, single_output_type);
        let available: u128 = effective.iter().map(|coin| coin.magnitude).sum();

        debug!(
            "sweep: {} coins, available={} spendable={}",
            effective.len(),
            available,
            balance,
        );
        Ok(SpendableUnspentOutputs {
            absolute_fee: available - balance,
            spendable_outputs: effective,
            amount: balance,
            change: 0,
        })
    }
}
