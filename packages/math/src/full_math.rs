// SPDX-License-Identifier: MIT
// Wide intermediate arithmetic for token amounts

/// Type conversion helpers
#[inline]
pub fn i128_to_u128_checked(x: i128) -> Option<u128> {
    if x < 0 { None } else { Some(x as u128) }
}

#[inline]
pub fn u128_to_i128_checked(x: u128) -> Option<i128> {
    if x > i128::MAX as u128 { None } else { Some(x as i128) }
}

/// floor(value * numerator / denominator) without a wide intermediate
///
/// Splits `value` into quotient and remainder of `denominator` so only
/// `remainder * numerator` is ever multiplied. Exact for
/// `numerator <= denominator`, which covers bps and percentage shares.
#[inline]
pub fn mul_div_floor_small(value: i128, numerator: u32, denominator: u32) -> i128 {
    if value <= 0 || denominator == 0 {
        return 0;
    }
    let den = denominator as i128;
    let num = numerator as i128;
    (value / den) * num + (value % den) * num / den
}
