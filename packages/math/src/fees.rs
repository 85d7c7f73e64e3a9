// SPDX-License-Identifier: MIT
// Platform fee and volume split arithmetic

use crate::constants::{BPS_DENOMINATOR, MAX_PARTNER_FEE_BPS, PERCENT_DENOMINATOR};
use crate::full_math::mul_div_floor_small;

/// floor(gross * fee_bps / 10000)
///
/// Truncation dust stays with the trader. Zero for non-positive gross.
#[inline]
pub fn fee_amount(gross: i128, fee_bps: u32) -> i128 {
    if fee_bps > BPS_DENOMINATOR {
        return 0;
    }
    mul_div_floor_small(gross, fee_bps, BPS_DENOMINATOR)
}

/// Split gross output into (fee, net)
#[inline]
pub fn split_fee(gross: i128, fee_bps: u32) -> (i128, i128) {
    let fee = fee_amount(gross, fee_bps);
    (fee, gross - fee)
}

/// Partner fees are capped at 1%
#[inline]
pub fn is_valid_partner_fee(fee_bps: u32) -> bool {
    fee_bps <= MAX_PARTNER_FEE_BPS
}

/// Percentage share of bucket `k` out of `num_buckets`
#[inline]
pub fn bucket_share(k: u32, num_buckets: u32) -> u32 {
    if num_buckets == 0 || k >= num_buckets {
        return PERCENT_DENOMINATOR;
    }
    k * PERCENT_DENOMINATOR / num_buckets
}

/// Leg amounts for a two-way split
///
/// first = amount_in * share / 100, second = amount_in - first, so the
/// legs always add back up to `amount_in`.
#[inline]
pub fn split_amount(amount_in: i128, share_pct: u32) -> (i128, i128) {
    let share = share_pct.min(PERCENT_DENOMINATOR);
    let first = mul_div_floor_small(amount_in, share, PERCENT_DENOMINATOR);
    (first, amount_in - first)
}
