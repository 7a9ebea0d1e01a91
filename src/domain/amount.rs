//! Conversion between display units and integer base units.
//!
//! User input is typed in display units (`"1.5"` XCH), while the wallet RPC
//! speaks integer base units (`1500000000000` mojos). Conversion is done on
//! decimal strings so no precision is lost to floating point.

use super::error::AmountError;

/// Fixed precision of fungible token (CAT) amounts, independent of the
/// wallet's native unit.
pub const TOKEN_DECIMALS: u8 = 3;

/// Converts a decimal display amount into integer base units.
///
/// Leading and trailing whitespace is ignored, as are trailing zeros past the
/// unit's precision (`"1.5000"` is valid at 3 decimals).
///
/// # Errors
///
/// Returns [`AmountError::Invalid`] for anything other than a plain
/// non-negative decimal, [`AmountError::TooPrecise`] when significant digits
/// exceed `decimals`, and [`AmountError::Overflow`] when the result does not
/// fit in a `u128`.
pub fn to_base_units(amount: &str, decimals: u8) -> Result<u128, AmountError> {
    let trimmed = amount.trim();
    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));

    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
        return Err(AmountError::Invalid(amount.to_string()));
    }

    let fraction = fraction.trim_end_matches('0');
    if fraction.len() > usize::from(decimals) {
        return Err(AmountError::TooPrecise {
            input: amount.to_string(),
            decimals,
        });
    }

    let overflow = || AmountError::Overflow(amount.to_string());

    let scale = 10u128
        .checked_pow(u32::from(decimals))
        .ok_or_else(overflow)?;
    let whole_units: u128 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| overflow())?
    };
    let fraction_units: u128 = if fraction.is_empty() {
        0
    } else {
        format!("{fraction:0<width$}", width = usize::from(decimals))
            .parse()
            .map_err(|_| overflow())?
    };

    whole_units
        .checked_mul(scale)
        .and_then(|units| units.checked_add(fraction_units))
        .ok_or_else(overflow)
}

/// Formats integer base units as a display amount with trailing zeros removed.
#[must_use]
pub fn to_display_units(units: u128, decimals: u8) -> String {
    let digits = units.to_string();
    let decimals = usize::from(decimals);

    if decimals == 0 {
        return digits;
    }

    let (whole, fraction) = if digits.len() > decimals {
        let (w, f) = digits.split_at(digits.len() - decimals);
        (w.to_string(), f.to_string())
    } else {
        ("0".to_string(), format!("{digits:0>decimals$}"))
    };

    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        whole
    } else {
        format!("{whole}.{fraction}")
    }
}

/// Converts an optional user-entered amount, treating blank input as zero.
///
/// # Errors
///
/// Propagates the conversion error for non-blank invalid input.
pub fn to_base_units_or_zero(amount: Option<&str>, decimals: u8) -> Result<u128, AmountError> {
    match amount.map(str::trim) {
        None | Some("") => Ok(0),
        Some(value) => to_base_units(value, decimals),
    }
}

// ============================================================================
// Tests
// ============================================================================
