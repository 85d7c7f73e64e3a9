// SPDX-License-Identifier: MIT
// Constant-product (x * y = k) pricing

use soroban_sdk::{Env, U256};

use crate::constants::BPS_DENOMINATOR;
use crate::full_math::{i128_to_u128_checked, u128_to_i128_checked};

/// Output amount for an exact input against one constant-product pair
///
/// amount_out = (amount_in * (10000 - fee_bps) * reserve_out)
///            / (reserve_in * 10000 + amount_in * (10000 - fee_bps))
///
/// At 30 bps this is the familiar 997/1000 form scaled by 10, so the
/// floor is identical. Exchanges and routes both call this function, which
/// keeps a route's quote bit-exact with the exchange's own execution.
pub fn get_amount_out(
    env: &Env,
    amount_in: i128,
    reserve_in: i128,
    reserve_out: i128,
    fee_bps: u32,
) -> Option<i128> {
    if amount_in <= 0 || reserve_in <= 0 || reserve_out <= 0 {
        return None;
    }
    if fee_bps >= BPS_DENOMINATOR {
        return None;
    }

    let amount_in_with_fee = U256::from_u128(env, i128_to_u128_checked(amount_in)?)
        .mul(&U256::from_u32(env, BPS_DENOMINATOR - fee_bps));
    let numerator = amount_in_with_fee.mul(&U256::from_u128(env, i128_to_u128_checked(reserve_out)?));
    let denominator = U256::from_u128(env, i128_to_u128_checked(reserve_in)?)
        .mul(&U256::from_u32(env, BPS_DENOMINATOR))
        .add(&amount_in_with_fee);

    u128_to_i128_checked(numerator.div(&denominator).to_u128()?)
}
