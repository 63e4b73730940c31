//! Transaction size and fee calculation
//!
//! This module translates coin and output counts into byte-size estimates,
//! fee amounts, and dust thresholds. It is the single place in the crate
//! where per-script-type byte costs live.
//!
//! # Numeric Semantics
//!
//! Byte costs are held as [`Decimal`] fixed-point values because segwit input
//! costs are fractional (a P2WPKH input weighs 67.75 bytes). Every fee
//! product is rounded **up** to the next whole unit before it is added to an
//! integer accumulator, so the wallet never under-pays a fee.

use crate::types::{ScriptType, UnspentOutput};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixed byte cost of a transaction independent of inputs and outputs
/// (version, locktime, counts).
const TX_OVERHEAD_BYTES: Decimal = dec!(10);

/// Marginal byte cost of one input of the given script type.
fn input_cost(script_type: ScriptType) -> Decimal {
    match script_type {
        ScriptType::P2pkh => dec!(148),
        ScriptType::P2wpkh => dec!(67.75),
    }
}

/// Marginal byte cost of one output of the given script type.
fn output_cost(script_type: ScriptType) -> Decimal {
    match script_type {
        ScriptType::P2pkh => dec!(34),
        ScriptType::P2wpkh => dec!(31),
    }
}

/// Multiply a byte size by a fee rate and round up to a whole unit.
///
/// # Arguments
/// * `bytes` - Byte size as fixed-point decimal
/// * `fee_per_byte` - Fee rate in smallest units per byte
///
/// # Returns
/// * Fee in smallest units, rounded up
pub fn fee_rounded_up(bytes: Decimal, fee_per_byte: u64) -> u128 {
    (bytes * Decimal::from(fee_per_byte))
        .ceil()
        .to_u128()
        .unwrap_or(0)
}

/// Capability of translating script-type counts into sizes, fees, and dust
/// thresholds.
///
/// The selector is generic over this trait so tests and alternative
/// chain parameter sets can substitute their own byte-cost tables.
pub trait TransactionSizing {
    /// Estimated serialized transaction size in bytes for the given inputs
    /// and outputs, including the fixed transaction overhead.
    fn transaction_bytes(&self, inputs: &[ScriptType], outputs: &[ScriptType]) -> Decimal;

    /// Marginal byte cost of adding one input of the given type.
    fn input_bytes(&self, script_type: ScriptType) -> Decimal;

    /// Marginal byte cost of adding one output of the given type.
    fn output_bytes(&self, script_type: ScriptType) -> Decimal;

    /// Total spendable amount after sweeping `coins` into a single output of
    /// `single_output_type` at the given fee rate.
    ///
    /// Saturates at zero when the sweep fee exceeds the coins' total value.
    fn effective_balance(
        &self,
        fee_per_byte: u64,
        coins: &[UnspentOutput],
        single_output_type: ScriptType,
    ) -> u128 {
        let input_types: Vec<ScriptType> = coins.iter().map(|coin| coin.script_type).collect();
        let bytes = self.transaction_bytes(&input_types, &[single_output_type]);
        let fee = fee_rounded_up(bytes, fee_per_byte);
        let available: u128 = coins.iter().map(|coin| coin.magnitude).sum();
        available.saturating_sub(fee)
    }

    /// Minimum amount below which a change output of the given type is not
    /// worth creating: spending it later as an input would cost more than
    /// its value.
    fn dust_threshold(&self, fee_per_byte: u64, output_type: ScriptType) -> u128 {
        fee_rounded_up(self.input_bytes(output_type), fee_per_byte)
    }

    /// Check whether a coin is worth spending at the given fee rate.
    ///
    /// A coin is effective only if its value strictly exceeds the marginal
    /// fee cost of including it as an input. Zero-valued coins are never
    /// effective.
    fn is_effective(&self, coin: &UnspentOutput, fee_per_byte: u64) -> bool {
        let cost = self.input_bytes(coin.script_type) * Decimal::from(fee_per_byte);
        match Decimal::from_u128(coin.magnitude) {
            Some(value) => value > cost,
            // Magnitudes beyond Decimal's range dwarf any realistic input cost.
            None => true,
        }
    }
}

/// Default byte-cost table for Bitcoin-family transactions.
///
/// Input costs: P2PKH 148 bytes, P2WPKH 67.75 bytes. Output costs: P2PKH 34
/// bytes, P2WPKH 31 bytes. Fixed overhead: 10 bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionSizeCalculator;

impl TransactionSizeCalculator {
    /// Create a new calculator with the default byte-cost table
    pub fn new() -> Self {
        Self
    }
}

impl TransactionSizing for TransactionSizeCalculator {
    fn transaction_bytes(&self, inputs: &[ScriptType], outputs: &[ScriptType]) -> Decimal {
        let input_bytes: Decimal = inputs.iter().map(|script| input_cost(*script)).sum();
        let output_bytes: Decimal = outputs.iter().map(|script| output_cost(*script)).sum();
        TX_OVERHEAD_BYTES + input_bytes + output_bytes
    }

    fn input_bytes(&self, script_type: ScriptType) -> Decimal {
        input_cost(script_type)
    }

    fn output_bytes(&self, script_type: ScriptType) -> Decimal {
        output_cost(script_type)
    }
}
