//! Transfer fee arithmetic mirroring the deployed hook program.

use crate::{PresetError, TransferFeeParams};

/// The result of applying a fee to a transfer amount.
///
/// Invariant: `fee + net == amount`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeBreakdown {
    pub fee: u64,
    pub net: u64,
}

/// Fee taken from `amount` at `basis_points`, capped at `max_fee`.
///
/// Floor division by 10_000; zero when either the rate or the amount is zero.
/// The widening to u128 makes the intermediate product overflow-free for any
/// `u64` amount and any `u16` rate.
pub fn calculate_fee(amount: u64, basis_points: u16, max_fee: u64) -> u64 {
    if basis_points == 0 || amount == 0 {
        return 0;
    }

    let fee = (amount as u128 * basis_points as u128 / 10_000) as u64;

    fee.min(max_fee)
}

/// Splits `amount` into the fee owed under `params` and the net amount
/// the recipient receives.
pub fn fee_breakdown(amount: u64, params: &TransferFeeParams) -> Result<FeeBreakdown, PresetError> {
    let fee = calculate_fee(amount, params.basis_points, params.max_fee);
    let net = amount
        .checked_sub(fee)
        .ok_or(PresetError::ArithmeticOverflow)?;

    Ok(FeeBreakdown { fee, net })
}
