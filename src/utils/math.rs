//! Normalization of raw token amounts and spot prices

use crate::types::Price;

/// `10^n` for any exponent a token's `decimals()` can report.
pub fn pow10(n: u8) -> f64 {
    10f64.powi(i32::from(n))
}

/// Converts a raw on-chain amount into whole-token units (`raw / 10^decimals`).
///
/// A u112 reserve over `10^255` stays well inside the `f64` range, so this
/// never overflows; the result carries about 15 significant digits.
pub fn normalize_amount(raw: u128, decimals: u8) -> f64 {
    raw as f64 / pow10(decimals)
}

/// Units of the quote token per unit of the base token:
/// `(quote_raw * 10^base_decimals) / (base_raw * 10^quote_decimals)`.
///
/// Both products stay below `2^112 * 10^255 ≈ 5.2e288`, so the quotient is
/// always finite and non-zero for non-zero reserves. An empty base reserve
/// makes the price unbounded.
pub fn spot_price(base_raw: u128, base_decimals: u8, quote_raw: u128, quote_decimals: u8) -> Price {
    if base_raw == 0 {
        return Price::Unbounded;
    }

    let numerator = quote_raw as f64 * pow10(base_decimals);
    let denominator = base_raw as f64 * pow10(quote_decimals);
    Price::Finite(numerator / denominator)
}
