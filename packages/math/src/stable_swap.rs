// SPDX-License-Identifier: MIT
// Stable-swap invariant math
//
//   A * n^n * sum(x) + D = A * D * n^n + D^(n+1) / (n^n * prod(x))
//
// Balances are normalized to 18 decimals with per-coin rate multipliers
// before any invariant math. All intermediates are U256.

use soroban_sdk::{Env, Vec, U256};

use crate::constants::{
    MAX_STABLE_ITERATIONS, STABLE_FEE_DENOMINATOR, STABLE_PRECISION_DECIMALS,
};
use crate::full_math::{i128_to_u128_checked, u128_to_i128_checked};

/// Rate multiplier lifting a `decimals`-precision amount to 18 decimals
pub fn rate_multiplier(decimals: u32) -> Option<i128> {
    if decimals > STABLE_PRECISION_DECIMALS {
        return None;
    }
    10i128.checked_pow(STABLE_PRECISION_DECIMALS - decimals)
}

/// Normalized balances: xp[k] = balances[k] * multipliers[k]
pub fn normalize(env: &Env, balances: &Vec<i128>, multipliers: &Vec<i128>) -> Option<Vec<U256>> {
    if balances.len() != multipliers.len() {
        return None;
    }
    let mut xp = Vec::new(env);
    for (balance, multiplier) in balances.iter().zip(multipliers.iter()) {
        let b = U256::from_u128(env, i128_to_u128_checked(balance)?);
        let m = U256::from_u128(env, i128_to_u128_checked(multiplier)?);
        xp.push_back(b.mul(&m));
    }
    Some(xp)
}

#[inline]
fn within_one(a: &U256, b: &U256, one: &U256) -> bool {
    if a > b {
        a.sub(b) <= *one
    } else {
        b.sub(a) <= *one
    }
}

/// Invariant D for normalized balances `xp` (Newton's method)
///
/// Returns `None` for fewer than two coins, a zero amplification, an empty
/// coin or when the iteration does not converge.
pub fn compute_d(env: &Env, xp: &Vec<U256>, amp: u32) -> Option<U256> {
    let n = xp.len();
    if n < 2 || amp == 0 {
        return None;
    }

    let zero = U256::from_u32(env, 0);
    let one = U256::from_u32(env, 1);
    let n_coins = U256::from_u32(env, n);

    let mut sum = zero.clone();
    for x in xp.iter() {
        if x == zero {
            return None;
        }
        sum = sum.add(&x);
    }

    let ann = U256::from_u32(env, amp.checked_mul(n)?);
    let ann_minus_one = ann.sub(&one);
    let n_plus_one = U256::from_u32(env, n + 1);

    let mut d = sum.clone();
    for _ in 0..MAX_STABLE_ITERATIONS {
        let mut d_p = d.clone();
        for x in xp.iter() {
            d_p = d_p.mul(&d).div(&x.mul(&n_coins));
        }

        let d_prev = d.clone();
        let numerator = ann.mul(&sum).add(&d_p.mul(&n_coins)).mul(&d);
        let denominator = ann_minus_one.mul(&d).add(&n_plus_one.mul(&d_p));
        d = numerator.div(&denominator);

        if within_one(&d, &d_prev, &one) {
            return Some(d);
        }
    }

    None
}

/// New normalized balance of coin `j` after coin `i` moves to `x`,
/// holding D constant
pub fn compute_y(env: &Env, i: u32, j: u32, x: &U256, xp: &Vec<U256>, amp: u32) -> Option<U256> {
    let n = xp.len();
    if i == j || i >= n || j >= n {
        return None;
    }

    let d = compute_d(env, xp, amp)?;

    let zero = U256::from_u32(env, 0);
    let one = U256::from_u32(env, 1);
    let n_coins = U256::from_u32(env, n);
    let ann = U256::from_u32(env, amp.checked_mul(n)?);

    let mut c = d.clone();
    let mut s = zero.clone();
    for k in 0..n {
        let x_k = if k == i {
            x.clone()
        } else if k != j {
            xp.get(k)?
        } else {
            continue;
        };
        if x_k == zero {
            return None;
        }
        s = s.add(&x_k);
        c = c.mul(&d).div(&x_k.mul(&n_coins));
    }
    c = c.mul(&d).div(&ann.mul(&n_coins));
    let b = s.add(&d.div(&ann));

    let mut y = d.clone();
    for _ in 0..MAX_STABLE_ITERATIONS {
        let y_prev = y.clone();
        let two_y_plus_b = y.add(&y).add(&b);
        if two_y_plus_b <= d {
            return None;
        }
        y = y.mul(&y).add(&c).div(&two_y_plus_b.sub(&d));

        if within_one(&y, &y_prev, &one) {
            return Some(y);
        }
    }

    None
}

/// Output of coin `j` for `dx` of coin `i`, net of the pool fee
///
/// `balances` are raw token balances, `multipliers` their rate multipliers
/// (see `rate_multiplier`), `fee` is in 1e10 units. One unit is held back
/// from the raw difference to absorb rounding in `compute_y`.
pub fn get_dy(
    env: &Env,
    i: u32,
    j: u32,
    dx: i128,
    balances: &Vec<i128>,
    multipliers: &Vec<i128>,
    amp: u32,
    fee: u32,
) -> Option<i128> {
    if dx <= 0 {
        return None;
    }

    let xp = normalize(env, balances, multipliers)?;
    let rate_i = U256::from_u128(env, i128_to_u128_checked(multipliers.get(i)?)?);
    let rate_j = U256::from_u128(env, i128_to_u128_checked(multipliers.get(j)?)?);

    let x = xp.get(i)?.add(&U256::from_u128(env, i128_to_u128_checked(dx)?).mul(&rate_i));
    let y = compute_y(env, i, j, &x, &xp, amp)?;

    let one = U256::from_u32(env, 1);
    let xp_j = xp.get(j)?;
    let y_plus_one = y.add(&one);
    if xp_j < y_plus_one {
        return None;
    }

    let dy = xp_j.sub(&y_plus_one).div(&rate_j);
    let fee_amount = dy
        .mul(&U256::from_u32(env, fee))
        .div(&U256::from_u128(env, STABLE_FEE_DENOMINATOR));

    u128_to_i128_checked(dy.sub(&fee_amount).to_u128()?)
}
