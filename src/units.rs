// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! NEAR unit conversions
//!
//! Pure functions from the node's gas price (yoctoNEAR per gas, a decimal
//! string) to NEAR per Tgas, and from there to the cost of a Tgas count.
//!
//! All arithmetic is done in [`BigDecimal`], so the only rounding is the
//! explicit one at the end. None of these functions fail: unusable input
//! (empty, non-numeric, negative, non-finite) converts to `0.0`.
//!
//! # Rounding policy
//!
//! [`round_half_away`] rounds ties away from zero (`RoundingMode::HalfUp`).
//! An `f64` input is first rendered with Rust's shortest round-trip
//! representation, so the value rounded is the decimal literal you would
//! write, not its binary expansion: `0.0000125` rounds to `0.000013`.

use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode, Signed};

use crate::config::constants::units::{
    COST_DECIMALS, GAS_PER_TGAS_EXP, YOCTO_PER_NEAR_EXP,
};

/// Convert yoctoNEAR per gas into NEAR per Tgas
///
/// Computes `price * 10^12 / 10^24` exactly, then converts to `f64`.
///
/// # Example
/// ```
/// use nearscan::units::yocto_per_gas_to_near_per_tgas;
///
/// assert_eq!(yocto_per_gas_to_near_per_tgas("100000000"), 0.0001);
/// assert_eq!(yocto_per_gas_to_near_per_tgas("0"), 0.0);
/// assert_eq!(yocto_per_gas_to_near_per_tgas("abc"), 0.0);
/// ```
pub fn yocto_per_gas_to_near_per_tgas(yocto_per_gas: &str) -> f64 {
    let Some(price) = parse_non_negative(yocto_per_gas) else {
        return 0.0;
    };

    // Shift the decimal point: ×10^12 gas per Tgas, ÷10^24 yocto per NEAR
    let (digits, scale) = price.into_bigint_and_exponent();
    let Some(scale) = scale.checked_add(YOCTO_PER_NEAR_EXP - GAS_PER_TGAS_EXP) else {
        return 0.0;
    };
    to_f64(&BigDecimal::new(digits, scale))
}

/// Alias of [`yocto_per_gas_to_near_per_tgas`] in chain-neutral terms
pub fn base_unit_to_cost_per_block(base_unit_price: &str) -> f64 {
    yocto_per_gas_to_near_per_tgas(base_unit_price)
}

/// NEAR cost of `tgas` Tgas at `near_per_tgas`, rounded to 6 decimals
///
/// # Example
/// ```
/// use nearscan::units::cost_for_tgas;
///
/// assert_eq!(cost_for_tgas(0.0001, 7), 0.0007);
/// assert_eq!(cost_for_tgas(f64::NAN, 7), 0.0);
/// ```
pub fn cost_for_tgas(near_per_tgas: f64, tgas: u64) -> f64 {
    let Some(price) = decimal_from_f64(near_per_tgas) else {
        return 0.0;
    };
    if price.is_negative() {
        return 0.0;
    }
    let cost = price * BigDecimal::from(tgas);
    to_f64(&cost.with_scale_round(COST_DECIMALS, RoundingMode::HalfUp))
}

/// Alias of [`cost_for_tgas`] in chain-neutral terms
pub fn cost_for_units(price_per_block: f64, unit_count: u64) -> f64 {
    cost_for_tgas(price_per_block, unit_count)
}

/// Round to `places` decimals, ties away from zero
///
/// Non-finite input returns `0.0`.
///
/// # Example
/// ```
/// use nearscan::units::round_half_away;
///
/// assert_eq!(round_half_away(2.345, 2), 2.35);
/// assert_eq!(round_half_away(-2.345, 2), -2.35);
/// assert_eq!(round_half_away(f64::INFINITY, 2), 0.0);
/// ```
pub fn round_half_away(value: f64, places: i64) -> f64 {
    match decimal_from_f64(value) {
        Some(decimal) => to_f64(&decimal.with_scale_round(places, RoundingMode::HalfUp)),
        None => 0.0,
    }
}

fn parse_non_negative(raw: &str) -> Option<BigDecimal> {
    let value = BigDecimal::from_str(raw.trim()).ok()?;
    (!value.is_negative()).then_some(value)
}

fn decimal_from_f64(value: f64) -> Option<BigDecimal> {
    if !value.is_finite() {
        return None;
    }
    // Display for f64 never uses exponent notation and round-trips exactly
    BigDecimal::from_str(&value.to_string()).ok()
}

fn to_f64(value: &BigDecimal) -> f64 {
    let converted = value.to_string().parse::<f64>().unwrap_or(0.0);
    if converted.is_finite() {
        converted
    } else {
        0.0
    }
}
