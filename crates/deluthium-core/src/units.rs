//! Token unit conversion and fee constants.

use crate::error::{CoreError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Maker fee ratio. RFQ fills have no maker side.
pub const MAKER_FEE: Decimal = Decimal::ZERO;

/// Taker fee ratio (0.1%).
pub const TAKER_FEE: Decimal = Decimal::from_parts(1, 0, 0, false, 3);

/// Convert a human-readable token amount to its smallest unit (wei).
///
/// Truncates any precision finer than `decimals`. Amounts whose scaled
/// value exceeds the decimal range (or is negative) are rejected rather
/// than wrapped or panicked on.
pub fn to_wei(amount: Decimal, decimals: u32) -> Result<u128> {
    let factor = Decimal::from_i128_with_scale(10i128.pow(decimals.min(28)), 0);
    amount
        .checked_mul(factor)
        .and_then(|scaled| scaled.trunc().to_u128())
        .ok_or_else(|| CoreError::AmountOutOfRange(amount.to_string()))
}

/// Convert a wei (smallest unit) value back to a human-readable amount.
///
/// Fails for values beyond the decimal mantissa range instead of wrapping
/// into a negative amount.
pub fn from_wei(wei: u128, decimals: u32) -> Result<Decimal> {
    let signed = i128::try_from(wei)
        .map_err(|_| CoreError::AmountOutOfRange(wei.to_string()))?;
    Decimal::try_from_i128_with_scale(signed, decimals.min(28))
        .map_err(|_| CoreError::AmountOutOfRange(wei.to_string()))
}
